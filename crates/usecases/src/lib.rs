// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The faceted filter engine
//!
//! Each recompute cycle evaluates the facet state against all records,
//! derives the remaining options of every facet from the filtered
//! records, and projects them into counts, markers, and citations.

pub mod facet;
pub mod filter;
pub mod projection;
pub mod recompute;

pub use self::recompute::{FilterResult, Params, recompute};

#[cfg(test)]
pub(crate) mod testing;
