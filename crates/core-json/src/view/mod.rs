// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Outputs for rendering collaborators

use crate::prelude::*;

mod _core {
    pub(super) use biomap_core::Coordinates;
    pub(super) use biomap_core_api::{
        Citation, FacetOption, FacetOptionLists, FacetOptions, Marker, MarkerStyle, Popup, Summary,
        projection::PublishedPopup,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub record_count: usize,
    pub location_count: usize,
}

impl From<&_core::Summary> for Summary {
    fn from(from: &_core::Summary) -> Self {
        let _core::Summary {
            record_count,
            location_count,
        } = *from;
        Self {
            record_count,
            location_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,

    /// Citation rank of literature options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<i64>,
}

impl From<&_core::FacetOption> for FacetOption {
    fn from(from: &_core::FacetOption) -> Self {
        let _core::FacetOption { value, label, rank } = from;
        Self {
            value: value.clone(),
            label: label.clone(),
            rank: *rank,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetOptions {
    pub facet: String,
    pub default_label: String,
    pub count: usize,
    pub options: Vec<FacetOption>,
}

impl From<&_core::FacetOptions> for FacetOptions {
    fn from(from: &_core::FacetOptions) -> Self {
        Self {
            facet: from.facet.to_string(),
            default_label: from.default_label.clone(),
            count: from.len(),
            options: from.options.iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl From<_core::Coordinates> for Position {
    fn from(from: _core::Coordinates) -> Self {
        let _core::Coordinates { lat, lon } = from;
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub shape: &'static str,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<&'static str>,
}

impl From<&_core::MarkerStyle> for MarkerStyle {
    fn from(from: &_core::MarkerStyle) -> Self {
        Self {
            shape: from.shape.into(),
            color: from.color,
            border_color: from.border_color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl From<&_core::Citation> for Citation {
    fn from(from: &_core::Citation) -> Self {
        Self {
            label: from.label.clone(),
            link: from.link.as_ref().map(ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
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
    pub literature_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literature_link: Option<String>,
}

impl From<&_core::PublishedPopup> for PublishedPopup {
    fn from(from: &_core::PublishedPopup) -> Self {
        Self {
            japanese_name: from.japanese_name.clone(),
            scientific_name: from.scientific_name.clone(),
            original_japanese_name: from.original_japanese_name.clone(),
            original_scientific_name: from.original_scientific_name.clone(),
            page: from.page.clone(),
            location: from.location.clone(),
            date: from.date.clone(),
            note: from.note.clone(),
            registrant: from.registrant.clone(),
            registration_date: from.registration_date.clone(),
            literature_title: from.literature_title().to_owned(),
            literature_link: from
                .literature
                .as_ref()
                .and_then(|citation| citation.link.as_ref())
                .map(ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Popup {
    #[serde(rename_all = "camelCase")]
    Unpublished {
        japanese_name: String,
        scientific_name: String,
    },
    Published(PublishedPopup),
}

impl From<&_core::Popup> for Popup {
    fn from(from: &_core::Popup) -> Self {
        match from {
            _core::Popup::Unpublished {
                japanese_name,
                scientific_name,
            } => Self::Unpublished {
                japanese_name: japanese_name.clone(),
                scientific_name: scientific_name.clone(),
            },
            _core::Popup::Published(published) => Self::Published(published.as_ref().into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: Position,
    pub style: MarkerStyle,
    pub popup: Popup,
}

impl From<&_core::Marker> for Marker {
    fn from(from: &_core::Marker) -> Self {
        Self {
            position: from.position.into(),
            style: (&from.style).into(),
            popup: (&from.popup).into(),
        }
    }
}

/// Everything a renderer needs after a recompute cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub summary: Summary,
    pub options: Vec<FacetOptions>,
    pub markers: Vec<Marker>,
    pub citations: Vec<Citation>,
}

impl View {
    #[must_use]
    pub fn new(
        summary: &_core::Summary,
        options: &_core::FacetOptionLists,
        markers: &[_core::Marker],
        citations: &[_core::Citation],
    ) -> Self {
        Self {
            summary: summary.into(),
            options: options.iter().map(Into::into).collect(),
            markers: markers.iter().map(Into::into).collect(),
            citations: citations.iter().map(Into::into).collect(),
        }
    }
}
