// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Faceted exploration of geocoded biological records
//!
//! Re-exports the sub-crates of the workspace. Everything beyond the
//! domain model is opt-in through features.

pub use biomap_core as core;

#[cfg(feature = "api")]
pub use biomap_core_api as api;

#[cfg(feature = "usecases")]
pub use biomap_usecases as usecases;

#[cfg(feature = "json")]
pub use biomap_core_json as json;

#[cfg(feature = "explorer")]
pub use biomap_explorer as explorer;
