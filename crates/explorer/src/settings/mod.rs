// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use biomap_core_api::{CitationPolicy, DefaultTexts};
use biomap_usecases::Params;

use crate::loader::SourceKind;

pub const FILE_NAME: &str = "biomap_settings";

pub const FILE_SUFFIX: &str = "ron";

/// File paths of the records and catalogs.
///
/// Relative paths are resolved against a base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSources {
    /// GeoJSON `FeatureCollection` with one feature per record.
    pub records: PathBuf,

    pub taxon_map: PathBuf,
    pub prefecture_order: PathBuf,
    pub island_order: PathBuf,
    pub literature: PathBuf,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            records: "records.geojson".into(),
            taxon_map: "taxon_map.json".into(),
            prefecture_order: "prefecture_order.json".into(),
            island_order: "island_order.json".into(),
            literature: "literature.json".into(),
        }
    }
}

impl DataSources {
    #[must_use]
    pub fn path(&self, kind: SourceKind) -> &Path {
        match kind {
            SourceKind::Records => &self.records,
            SourceKind::TaxonMap => &self.taxon_map,
            SourceKind::PrefectureOrder => &self.prefecture_order,
            SourceKind::IslandOrder => &self.island_order,
            SourceKind::Literature => &self.literature,
        }
    }

    #[must_use]
    pub fn resolve_path(&self, kind: SourceKind, base_dir: &Path) -> PathBuf {
        base_dir.join(self.path(kind))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_sources: DataSources,

    /// Identifies records that are excluded as citations.
    pub citation_policy: CitationPolicy,

    pub default_texts: DefaultTexts,
}

impl Settings {
    /// Load the settings or fall back to the defaults on failure.
    #[must_use]
    pub fn restore_from_parent_dir(parent_dir: &Path) -> Self {
        Self::load(parent_dir)
            .map_err(|err| {
                log::warn!("Failed to load saved settings: {err}");
            })
            .unwrap_or_default()
    }

    /// Load the settings from a file in the given directory.
    ///
    /// Returns the default settings if the file does not exist.
    pub fn load(parent_dir: &Path) -> anyhow::Result<Self> {
        let file_path = new_settings_file_path(parent_dir.to_path_buf());
        log::info!("Loading settings from file: {}", file_path.display());
        match fs::read_to_string(&file_path) {
            Ok(text) => ron::from_str(&text).map_err(Into::into),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Default::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, parent_dir: &Path) -> anyhow::Result<()> {
        let file_path = new_settings_file_path(parent_dir.to_path_buf());
        log::info!("Saving current settings into file: {}", file_path.display());
        let text = ron::ser::to_string_pretty(self, Default::default())?;
        if let Some(parent_path) = file_path.parent() {
            fs::create_dir_all(parent_path)?;
        }
        fs::write(&file_path, text)?;
        Ok(())
    }

    pub fn update_citation_policy(&mut self, citation_policy: CitationPolicy) -> bool {
        if self.citation_policy == citation_policy {
            // No effect
            return false;
        }
        log::info!("Updating citation policy: {citation_policy:?}");
        self.citation_policy = citation_policy;
        true
    }

    /// Parameters of the recompute cycle.
    #[must_use]
    pub fn params(&self) -> Params {
        let Self {
            data_sources: _,
            citation_policy,
            default_texts,
        } = self;
        Params {
            citation_policy: *citation_policy,
            default_texts: default_texts.clone(),
        }
    }
}

#[must_use]
fn new_settings_file_path(parent_dir: PathBuf) -> PathBuf {
    let mut path_buf = parent_dir;
    path_buf.push(FILE_NAME);
    path_buf.set_extension(FILE_SUFFIX);
    path_buf
}
