// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

#![warn(rustdoc::broken_intra_doc_links)]

pub mod literature;
pub mod record;
pub mod region;
pub mod store;
pub mod taxon;
pub mod util;

pub use self::{
    literature::{LiteratureCatalog, LiteratureEntry},
    record::{Coordinates, Record, RecordType},
    region::RegionOrder,
    store::{Catalogs, LoadError, RecordStore},
    taxon::TaxonMap,
};

pub mod prelude {
    // Re-export trait methods from semval
    pub use semval::{IsValid as _, Validate as _};

    pub(crate) use semval::prelude::*;

    pub use crate::util::{SENTINEL, is_sentinel, is_unset};
}
