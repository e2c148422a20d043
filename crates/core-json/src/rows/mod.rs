// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Catalog rows encoded as a JSON array of arrays
//!
//! The first row is the header. Cells are usually strings, numbers
//! are accepted and converted into their textual representation.

use biomap_core::util::row::Row;
use serde_json::Value;

use crate::_core;

fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn decode_rows(json: &[u8]) -> Result<Vec<Row>, _core::LoadError> {
    let rows: Vec<Vec<Value>> =
        serde_json::from_slice(json).map_err(|err| _core::LoadError::Malformed(err.to_string()))?;
    Ok(rows
        .into_iter()
        .map(|row| row.into_iter().map(cell_to_string).collect())
        .collect())
}
