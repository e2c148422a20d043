// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use thiserror::Error;

use crate::{
    literature::LiteratureCatalog,
    record::{FeatureProperties, Record},
    region::RegionOrder,
    taxon::TaxonMap,
};

/// Failure of loading a record source or catalog.
///
/// Never fatal: the affected data degrades to an empty collection.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("source unavailable: {0}")]
    Unavailable(String),

    #[error("malformed source: {0}")]
    Malformed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Auxiliary lookup tables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalogs {
    pub taxon_map: TaxonMap,
    pub prefecture_order: RegionOrder,
    pub island_order: RegionOrder,
    pub literature: LiteratureCatalog,
}

/// Immutable collection of all records.
///
/// The position of a record is its stable identity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
    catalogs: Catalogs,
}

impl RecordStore {
    #[must_use]
    pub fn new(records: Vec<Record>, catalogs: Catalogs) -> Self {
        Self { records, catalogs }
    }

    /// Create one record per feature.
    #[must_use]
    pub fn from_features<'a, F>(features: impl IntoIterator<Item = &'a F>, catalogs: Catalogs) -> Self
    where
        F: FeatureProperties + 'a,
    {
        let records = features
            .into_iter()
            .map(Record::from_feature)
            .collect::<Vec<_>>();
        let num_mappable = records
            .iter()
            .filter(|record| record.coordinates().is_some())
            .count();
        log::info!(
            "Loaded {num_records} record(s), {num_mappable} with coordinates",
            num_records = records.len()
        );
        Self::new(records, catalogs)
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    #[must_use]
    pub fn taxon_map(&self) -> &TaxonMap {
        &self.catalogs.taxon_map
    }

    #[must_use]
    pub fn prefecture_order(&self) -> &RegionOrder {
        &self.catalogs.prefecture_order
    }

    #[must_use]
    pub fn island_order(&self) -> &RegionOrder {
        &self.catalogs.island_order
    }

    #[must_use]
    pub fn literature(&self) -> &LiteratureCatalog {
        &self.catalogs.literature
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
