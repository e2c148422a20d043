// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use biomap::api::{CitationPolicy, Exclusion, Facet};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CitationPolicyArg {
    /// Records with `original` = "no"
    NotOriginal,

    /// Records with `original` = "-"
    UnknownOriginal,
}

impl From<CitationPolicyArg> for CitationPolicy {
    fn from(from: CitationPolicyArg) -> Self {
        match from {
            CitationPolicyArg::NotOriginal => Self::NotOriginal,
            CitationPolicyArg::UnknownOriginal => Self::UnknownOriginal,
        }
    }
}

/// Filter geocoded biological records by facets and print the view as JSON.
#[derive(Debug, Parser)]
#[command(name = "biomap", version)]
pub(crate) struct Args {
    /// Directory of the settings file
    #[arg(long, default_value = ".")]
    pub(crate) config_dir: PathBuf,

    /// Base directory for relative data file paths
    #[arg(long, default_value = ".")]
    pub(crate) data_dir: PathBuf,

    /// Species as "<scientific name> / <japanese name>"
    #[arg(long)]
    pub(crate) species: Option<String>,

    #[arg(long)]
    pub(crate) genus: Option<String>,

    #[arg(long)]
    pub(crate) family: Option<String>,

    #[arg(long)]
    pub(crate) order: Option<String>,

    #[arg(long)]
    pub(crate) prefecture: Option<String>,

    #[arg(long)]
    pub(crate) island: Option<String>,

    /// Literature id
    #[arg(long)]
    pub(crate) literature: Option<String>,

    /// Narrow the selectable options
    #[arg(long, short)]
    pub(crate) query: Option<String>,

    /// Exclude records without literature
    #[arg(long)]
    pub(crate) exclude_unpublished: bool,

    /// Exclude records of questionable type
    #[arg(long)]
    pub(crate) exclude_dubious: bool,

    /// Exclude citations of other records
    #[arg(long)]
    pub(crate) exclude_citation: bool,

    /// Override the citation policy of the settings
    #[arg(long, value_enum)]
    pub(crate) citation_policy: Option<CitationPolicyArg>,

    /// Save the effective settings
    #[arg(long)]
    pub(crate) save_settings: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub(crate) pretty: bool,
}

impl Args {
    /// Selected facets in facet order.
    pub(crate) fn selections(&self) -> impl Iterator<Item = (Facet, &str)> {
        let Self {
            species,
            genus,
            family,
            order,
            prefecture,
            island,
            literature,
            ..
        } = self;
        [
            (Facet::Species, species),
            (Facet::Genus, genus),
            (Facet::Family, family),
            (Facet::Order, order),
            (Facet::Prefecture, prefecture),
            (Facet::Island, island),
            (Facet::Literature, literature),
        ]
        .into_iter()
        .filter_map(|(facet, value)| value.as_deref().map(|value| (facet, value)))
    }

    pub(crate) fn exclusions(&self) -> impl Iterator<Item = Exclusion> {
        [
            (Exclusion::Unpublished, self.exclude_unpublished),
            (Exclusion::Dubious, self.exclude_dubious),
            (Exclusion::Citation, self.exclude_citation),
        ]
        .into_iter()
        .filter_map(|(exclusion, enabled)| enabled.then_some(exclusion))
    }
}
