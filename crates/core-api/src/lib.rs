// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

// Importing all enum variants into a narrow, local scope is acceptable.
#![allow(clippy::enum_glob_use)]

pub mod facet;
pub mod filtering;
pub mod option;
pub mod projection;

pub use self::{
    facet::{CitationPolicy, Exclusion, Exclusions, Facet, FacetSelections, FacetState, TaxonRank},
    filtering::TextQuery,
    option::{DefaultTexts, FacetOption, FacetOptionLists, FacetOptions},
    projection::{Citation, Marker, MarkerShape, MarkerStyle, Popup, Projection, Summary},
};
