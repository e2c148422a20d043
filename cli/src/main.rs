// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::io::{self, Write as _};

use anyhow::Context as _;
use clap::Parser as _;
use log::LevelFilter;

use biomap::{
    explorer::{
        loader::{FileDataSource, load_store},
        session::Session,
        settings::Settings,
    },
    json::view::View,
};

mod args;
use self::args::Args;

/// Default log level for debug builds.
#[cfg(debug_assertions)]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Info;

/// Reduce log verbosity for release builds.
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Warn;

fn explore(args: &Args, session: &mut Session) {
    for exclusion in args.exclusions() {
        session.set_exclusion(exclusion, true);
    }
    for (facet, value) in args.selections() {
        session.select_facet(facet, value);
    }
    if let Some(query) = &args.query {
        session.change_text(query.as_str());
    }
    // Each transition already recomputes the view
    let changed = session.execute();
    debug_assert!(!changed);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(DEFAULT_LOG_FILTER_LEVEL)
        // Parse environment variables after configuring all default option(s).
        .parse_default_env()
        .init();

    let args = Args::parse();

    let mut settings = Settings::restore_from_parent_dir(&args.config_dir);
    if let Some(citation_policy) = args.citation_policy {
        settings.update_citation_policy(citation_policy.into());
    }
    if args.save_settings {
        settings
            .save(&args.config_dir)
            .context("saving settings")?;
    }

    let source = FileDataSource::new(args.data_dir.clone(), settings.data_sources.clone());
    let store = load_store(&source).await;
    if store.is_empty() {
        log::warn!("No records available");
    }
    let mut session = Session::new(store, settings.params());
    explore(&args, &mut session);

    let view = session.view();
    log::info!(
        "Showing {record_count} record(s) at {location_count} location(s)",
        record_count = view.summary.record_count,
        location_count = view.summary.location_count,
    );
    let view = View::new(&view.summary, &view.options, &view.markers, &view.citations);
    let mut stdout = io::stdout().lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut stdout, &view)
    } else {
        serde_json::to_writer(&mut stdout, &view)
    }
    .context("writing view")?;
    writeln!(stdout)?;
    Ok(())
}
