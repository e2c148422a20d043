// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Rows of delimited catalogs
//!
//! Splitting a delimited file into rows and columns is the job of the
//! caller. Catalogs only receive the decoded columns of each row, with
//! the first row being a header that is skipped.

use thiserror::Error;

/// The columns of a single row.
pub type Row = Vec<String>;

/// A malformed row that has been skipped.
///
/// Row numbers are zero-based and include the header row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("row {row}: expected at least {expected} column(s), found {found}")]
    MissingColumns {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: empty key")]
    EmptyKey { row: usize },

    #[error("row {row}: duplicate key \"{key}\"")]
    DuplicateKey { row: usize, key: String },

    #[error("row {row}: {reason}")]
    Invalid { row: usize, reason: String },
}

/// Enumerate all data rows, i.e. skip the header row.
///
/// Blank rows, e.g. from a trailing line break, are skipped silently.
pub fn data_rows<I>(rows: I) -> impl Iterator<Item = (usize, Row)>
where
    I: IntoIterator<Item = Row>,
{
    rows.into_iter()
        .enumerate()
        .skip(1)
        .filter(|(_, row)| !is_blank(row))
}

#[must_use]
pub fn is_blank(row: &[String]) -> bool {
    row.iter().all(|column| column.trim().is_empty())
}

/// Access the trimmed column at `index`.
#[must_use]
pub fn column(row: &[String], index: usize) -> Option<&str> {
    row.get(index).map(|column| column.trim())
}

pub fn require_columns(row_index: usize, row: &[String], expected: usize) -> Result<(), ParseError> {
    if row.len() < expected {
        return Err(ParseError::MissingColumns {
            row: row_index,
            expected,
            found: row.len(),
        });
    }
    Ok(())
}

pub(crate) fn log_skipped(catalog: &str, err: &ParseError) {
    log::warn!("Skipping malformed {catalog} row: {err}");
}
