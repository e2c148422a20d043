// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod prelude {
    pub(crate) use serde::{Deserialize, Serialize};
}

pub mod feature;
pub mod rows;
pub mod view;

mod _core {
    pub(crate) use biomap_core::{Catalogs, Coordinates, LoadError, RecordStore};
}
