// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use smol_str::SmolStr;

pub mod row;

/// The placeholder for absent or unknown values.
pub const SENTINEL: &str = "-";

#[must_use]
pub fn is_sentinel(value: &str) -> bool {
    value == SENTINEL
}

/// Either empty or the sentinel.
#[must_use]
pub fn is_unset(value: &str) -> bool {
    value.is_empty() || is_sentinel(value)
}

/// Normalize an optional, raw string value.
///
/// Present values are trimmed while absent values are replaced
/// by the [`SENTINEL`]. A value that is empty after trimming
/// stays empty and is *not* replaced.
#[must_use]
pub fn normalize(value: Option<&str>) -> SmolStr {
    value.map_or_else(|| SmolStr::new_static(SENTINEL), |value| value.trim().into())
}

/// Normalize an optional value into `None` if it is unset.
#[must_use]
pub fn non_sentinel(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !is_unset(value))
}
