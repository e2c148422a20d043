// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use hashbrown::HashSet;
use smol_str::SmolStr;

use crate::util::row::{ParseError, Row, column, data_rows, log_skipped};

/// Canonical display order of a geographic facet, e.g. prefectures
/// from north to south or islands grouped by archipelago.
///
/// The sequence is kept as given, including duplicates. Lookups
/// treat it as a set and only the first occurrence of a name counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionOrder {
    names: Vec<SmolStr>,
}

impl RegionOrder {
    #[must_use]
    pub fn new(names: Vec<SmolStr>) -> Self {
        Self { names }
    }

    /// Build the order from delimited rows, skipping the header.
    ///
    /// Only the first column of each row is considered.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = Row>) -> Self {
        let mut names = Vec::new();
        for (row_index, row) in data_rows(rows) {
            match column(&row, 0).filter(|name| !name.is_empty()) {
                Some(name) => names.push(name.into()),
                None => log_skipped("region", &ParseError::EmptyKey { row: row_index }),
            }
        }
        log::debug!("Loaded {} region names", names.len());
        Self { names }
    }

    /// All names in canonical order, including duplicates.
    #[must_use]
    pub fn names(&self) -> &[SmolStr] {
        &self.names
    }

    /// Distinct names in canonical order.
    pub fn iter_unique(&self) -> impl Iterator<Item = &str> {
        let mut seen = HashSet::with_capacity(self.names.len());
        self.names
            .iter()
            .map(SmolStr::as_str)
            .filter(move |name| seen.insert(*name))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|known| known == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<T> FromIterator<T> for RegionOrder
where
    T: Into<SmolStr>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
