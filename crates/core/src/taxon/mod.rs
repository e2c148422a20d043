// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use hashbrown::HashMap;
use smol_str::SmolStr;

use crate::util::{
    SENTINEL,
    row::{ParseError, Row, column, data_rows, log_skipped, require_columns},
};

/// Translates scientific names of higher taxa into Japanese names.
///
/// Only used for decorating option labels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaxonMap {
    japanese_by_scientific: HashMap<SmolStr, SmolStr>,
}

impl TaxonMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse_row(row_index: usize, row: &[String]) -> Result<(SmolStr, SmolStr), ParseError> {
        require_columns(row_index, row, 2)?;
        let scientific_name = column(row, 0).unwrap_or_default();
        if scientific_name.is_empty() {
            return Err(ParseError::EmptyKey { row: row_index });
        }
        let japanese_name = column(row, 1).unwrap_or_default();
        Ok((scientific_name.into(), japanese_name.into()))
    }

    /// Build the map from delimited rows, skipping the header.
    ///
    /// The first translation of a scientific name wins.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = Row>) -> Self {
        let mut taxon_map = Self::new();
        for (row_index, row) in data_rows(rows) {
            match Self::parse_row(row_index, &row) {
                Ok((scientific_name, japanese_name)) => {
                    if taxon_map.japanese_by_scientific.contains_key(&scientific_name) {
                        log_skipped(
                            "taxon",
                            &ParseError::DuplicateKey {
                                row: row_index,
                                key: scientific_name.into(),
                            },
                        );
                        continue;
                    }
                    taxon_map.insert(scientific_name, japanese_name);
                }
                Err(err) => log_skipped("taxon", &err),
            }
        }
        log::debug!("Loaded {} taxon translations", taxon_map.len());
        taxon_map
    }

    pub fn insert(&mut self, scientific_name: impl Into<SmolStr>, japanese_name: impl Into<SmolStr>) {
        self.japanese_by_scientific
            .insert(scientific_name.into(), japanese_name.into());
    }

    #[must_use]
    pub fn translate(&self, scientific_name: &str) -> Option<&str> {
        self.japanese_by_scientific
            .get(scientific_name)
            .map(SmolStr::as_str)
            .filter(|japanese_name| !japanese_name.is_empty())
    }

    /// Translate or fall back to the sentinel.
    #[must_use]
    pub fn translate_or_sentinel(&self, scientific_name: &str) -> &str {
        self.translate(scientific_name).unwrap_or(SENTINEL)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.japanese_by_scientific.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.japanese_by_scientific.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TaxonMap
where
    K: Into<SmolStr>,
    V: Into<SmolStr>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut taxon_map = Self::new();
        for (scientific_name, japanese_name) in iter {
            taxon_map.insert(scientific_name, japanese_name);
        }
        taxon_map
    }
}
