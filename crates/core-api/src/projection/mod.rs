// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use biomap_core::Coordinates;
use url::Url;

/// Display title of unresolved literature references.
pub const UNKNOWN_LITERATURE_TITLE: &str = "unknown";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub record_count: usize,

    /// Number of distinct coordinate pairs.
    pub location_count: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum MarkerShape {
    Star,
    Square,
    Circle,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MarkerStyle {
    pub shape: MarkerShape,

    /// Fill color as CSS hex string.
    pub color: &'static str,

    pub border_color: Option<&'static str>,
}

/// A resolved literature reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Citation {
    pub label: String,
    pub link: Option<Url>,
}

/// Fields shown for records that refer to literature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishedPopup {
    pub japanese_name: String,
    pub scientific_name: String,
    pub original_japanese_name: String,
    pub original_scientific_name: String,
    pub page: String,
    pub location: String,
    pub date: String,
    pub note: String,
    pub registrant: String,
    pub registration_date: String,

    /// `None` if the literature id could not be resolved.
    pub literature: Option<Citation>,
}

impl PublishedPopup {
    #[must_use]
    pub fn literature_title(&self) -> &str {
        self.literature
            .as_ref()
            .map_or(UNKNOWN_LITERATURE_TITLE, |citation| citation.label.as_str())
    }
}

/// Structured popup content of a marker.
///
/// Rendering into markup is up to the map collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Popup {
    Unpublished {
        japanese_name: String,
        scientific_name: String,
    },
    Published(Box<PublishedPopup>),
}

impl Popup {
    #[must_use]
    pub const fn is_unpublished(&self) -> bool {
        matches!(self, Self::Unpublished { .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub position: Coordinates,
    pub style: MarkerStyle,
    pub popup: Popup,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Projection {
    pub summary: Summary,
    pub markers: Vec<Marker>,

    /// Literature of all markers in citation order.
    pub citations: Vec<Citation>,
}
