// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::cmp::Ordering;

use hashbrown::HashMap;
use smol_str::SmolStr;
use url::Url;

use crate::{
    prelude::*,
    util::{
        non_sentinel,
        row::{ParseError, Row, column, data_rows, log_skipped, require_columns},
    },
};

/// A citable source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteratureEntry {
    /// Unique key, referenced by records.
    pub id: SmolStr,

    /// Display title.
    ///
    /// Might embed emphasis markup, e.g. `<i>Rana</i>` for
    /// scientific names, which is passed through verbatim.
    pub label: String,

    pub link: Option<Url>,

    /// Explicit rank for ordering citations.
    pub order: i64,

    /// Zero-based position within the catalog.
    ///
    /// Breaks ties between entries with the same `order`.
    pub position: usize,
}

impl LiteratureEntry {
    #[must_use]
    pub fn cmp_citation_order(&self, other: &Self) -> Ordering {
        self.order
            .cmp(&other.order)
            .then_with(|| self.position.cmp(&other.position))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LiteratureEntryInvalidity {
    IdEmpty,
    IdSentinel,
    LabelEmpty,
}

impl Validate for LiteratureEntry {
    type Invalidity = LiteratureEntryInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(self.id.is_empty(), Self::Invalidity::IdEmpty)
            .invalidate_if(is_sentinel(&self.id), Self::Invalidity::IdSentinel)
            .invalidate_if(self.label.trim().is_empty(), Self::Invalidity::LabelEmpty)
            .into()
    }
}

const ORDER_COLUMN: usize = 0;
const ID_COLUMN: usize = 1;
const LABEL_COLUMN: usize = 2;
const LINK_COLUMN: usize = 3;

/// All citable sources in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiteratureCatalog {
    entries: Vec<LiteratureEntry>,
    index_by_id: HashMap<SmolStr, usize>,
}

impl LiteratureCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a single data row.
    ///
    /// Columns: order, id, label, and an optional link. An empty or
    /// non-numeric order falls back to the one-based number of the
    /// data row, i.e. `row_index` with the header being row 0.
    pub fn parse_row(row_index: usize, row: &[String], position: usize) -> Result<LiteratureEntry, ParseError> {
        require_columns(row_index, row, LABEL_COLUMN + 1)?;
        let id = column(row, ID_COLUMN).unwrap_or_default();
        let label = column(row, LABEL_COLUMN).unwrap_or_default();
        let order = column(row, ORDER_COLUMN)
            .and_then(|order| order.parse::<i64>().ok())
            .unwrap_or(row_index as i64);
        let link = non_sentinel(column(row, LINK_COLUMN)).and_then(|link| {
            Url::parse(link)
                .map_err(|err| {
                    log::warn!("Ignoring invalid literature link \"{link}\" in row {row_index}: {err}");
                })
                .ok()
        });
        let entry = LiteratureEntry {
            id: id.into(),
            label: label.to_owned(),
            link,
            order,
            position,
        };
        if let Err(context) = entry.validate() {
            if id.is_empty() {
                return Err(ParseError::EmptyKey { row: row_index });
            }
            return Err(ParseError::Invalid {
                row: row_index,
                reason: format!("{context:?}"),
            });
        }
        Ok(entry)
    }

    /// Build the catalog from delimited rows, skipping the header.
    ///
    /// Malformed rows and rows with a duplicate id are skipped.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = Row>) -> Self {
        let mut catalog = Self::new();
        for (row_index, row) in data_rows(rows) {
            let position = catalog.len();
            let entry = match Self::parse_row(row_index, &row, position) {
                Ok(entry) => entry,
                Err(err) => {
                    log_skipped("literature", &err);
                    continue;
                }
            };
            if let Err(entry) = catalog.try_push(entry) {
                log_skipped(
                    "literature",
                    &ParseError::DuplicateKey {
                        row: row_index,
                        key: entry.id.into(),
                    },
                );
            }
        }
        log::debug!("Loaded {} literature entries", catalog.len());
        catalog
    }

    /// Append an entry.
    ///
    /// Rejects and returns entries with an id that already exists.
    pub fn try_push(&mut self, entry: LiteratureEntry) -> Result<(), LiteratureEntry> {
        if self.index_by_id.contains_key(&entry.id) {
            return Err(entry);
        }
        self.index_by_id.insert(entry.id.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LiteratureEntry> {
        self.index_by_id.get(id).map(|index| &self.entries[*index])
    }

    /// Entries in input order.
    pub fn iter(&self) -> impl Iterator<Item = &LiteratureEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<LiteratureEntry> for LiteratureCatalog {
    fn from_iter<T: IntoIterator<Item = LiteratureEntry>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            if let Err(entry) = catalog.try_push(entry) {
                log::warn!("Discarding duplicate literature entry: {}", entry.id);
            }
        }
        catalog
    }
}
