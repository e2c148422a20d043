// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{io, path::PathBuf};

use biomap_core::{
    Catalogs, LiteratureCatalog, LoadError, RecordStore, RegionOrder, TaxonMap, util::row::Row,
};
use biomap_core_json::{
    feature::{FeatureCollection, decode_feature_collection},
    rows::decode_rows,
};

use crate::settings::DataSources;

/// The kinds of data that are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    TaxonMap,
    PrefectureOrder,
    IslandOrder,
    Literature,
    Records,
}

impl SourceKind {
    /// All catalogs are loaded before the records.
    pub const LOAD_ORDER: [Self; 5] = [
        Self::TaxonMap,
        Self::PrefectureOrder,
        Self::IslandOrder,
        Self::Literature,
        Self::Records,
    ];
}

/// Provides the raw contents of records and catalogs.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn fetch(&self, kind: SourceKind) -> Result<Vec<u8>, LoadError>;
}

/// Reads all data from local files.
#[derive(Debug, Clone)]
pub struct FileDataSource {
    base_dir: PathBuf,
    data_sources: DataSources,
}

impl FileDataSource {
    #[must_use]
    pub fn new(base_dir: PathBuf, data_sources: DataSources) -> Self {
        Self {
            base_dir,
            data_sources,
        }
    }
}

impl DataSource for FileDataSource {
    async fn fetch(&self, kind: SourceKind) -> Result<Vec<u8>, LoadError> {
        let file_path = self.data_sources.resolve_path(kind, &self.base_dir);
        log::info!("Loading {kind:?} from file: {}", file_path.display());
        tokio::fs::read(&file_path).await.map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                LoadError::Unavailable(file_path.display().to_string())
            } else {
                err.into()
            }
        })
    }
}

async fn fetch_rows(source: &impl DataSource, kind: SourceKind) -> Result<Vec<Row>, LoadError> {
    let bytes = source.fetch(kind).await?;
    decode_rows(&bytes)
}

fn or_empty<T: Default>(kind: SourceKind, loaded: Result<T, LoadError>) -> T {
    loaded.unwrap_or_else(|err| {
        log::warn!("Failed to load {kind:?}: {err}");
        T::default()
    })
}

/// Load the catalogs and then the records in [`SourceKind::LOAD_ORDER`].
///
/// Never fails. Catalogs that fail to load are empty. If the records
/// fail to load the store is empty.
pub async fn load_store(source: &impl DataSource) -> RecordStore {
    let mut catalogs = Catalogs::default();
    let mut features = Vec::new();
    for kind in SourceKind::LOAD_ORDER {
        match kind {
            SourceKind::TaxonMap => {
                catalogs.taxon_map =
                    or_empty(kind, fetch_rows(source, kind).await.map(TaxonMap::from_rows));
            }
            SourceKind::PrefectureOrder => {
                catalogs.prefecture_order =
                    or_empty(kind, fetch_rows(source, kind).await.map(RegionOrder::from_rows));
            }
            SourceKind::IslandOrder => {
                catalogs.island_order =
                    or_empty(kind, fetch_rows(source, kind).await.map(RegionOrder::from_rows));
            }
            SourceKind::Literature => {
                catalogs.literature = or_empty(
                    kind,
                    fetch_rows(source, kind)
                        .await
                        .map(LiteratureCatalog::from_rows),
                );
            }
            SourceKind::Records => {
                let decoded = source
                    .fetch(kind)
                    .await
                    .and_then(|bytes| decode_feature_collection(&bytes));
                FeatureCollection { features } = or_empty(kind, decoded);
            }
        }
    }
    RecordStore::from_features(&features, catalogs)
}
