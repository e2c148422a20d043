// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use hashbrown::HashSet;
use itertools::Itertools as _;

use biomap_core::{LiteratureCatalog, LiteratureEntry, Record, RecordType};
use biomap_core_api::{
    Citation, Marker, MarkerShape, MarkerStyle, Popup, Projection, Summary,
    projection::PublishedPopup,
};

/// Style of markers with an unrecognized record type.
pub const DEFAULT_MARKER_STYLE: MarkerStyle = MarkerStyle {
    shape: MarkerShape::Circle,
    color: "#808080",
    border_color: None,
};

const fn style(
    shape: MarkerShape,
    color: &'static str,
    border_color: Option<&'static str>,
) -> MarkerStyle {
    MarkerStyle {
        shape,
        color,
        border_color,
    }
}

/// Classify a marker by the record type.
///
/// Type localities are drawn as stars, specimens as squares, and
/// literature records as circles. Questionable variants use a pale
/// fill with the border color of their confirmed counterpart.
#[must_use]
pub const fn marker_style(record_type: Option<RecordType>) -> MarkerStyle {
    let Some(record_type) = record_type else {
        return DEFAULT_MARKER_STYLE;
    };
    match record_type {
        RecordType::TypeLocality => style(MarkerShape::Star, "#ff0000", None),
        RecordType::IntegratedTypeLocality => style(MarkerShape::Star, "#ff8c00", None),
        RecordType::QuestionableTypeLocality => {
            style(MarkerShape::Star, "#ffff00", Some("#ff0000"))
        }
        RecordType::QuestionableIntegratedTypeLocality => {
            style(MarkerShape::Star, "#ffe4b5", Some("#ff8c00"))
        }
        RecordType::SpecimenRecord => style(MarkerShape::Square, "#0000ff", None),
        RecordType::LiteratureRecord => style(MarkerShape::Circle, "#00bfff", None),
        RecordType::QuestionableLiteratureRecord => {
            style(MarkerShape::Circle, "#e0ffff", Some("#00bfff"))
        }
    }
}

#[must_use]
pub fn summarize(filtered: &[&Record]) -> Summary {
    let location_count = filtered
        .iter()
        .filter_map(|record| record.coordinates())
        .map(|coordinates| coordinates.location_key())
        .collect::<HashSet<_>>()
        .len();
    Summary {
        record_count: filtered.len(),
        location_count,
    }
}

fn citation_of(entry: &LiteratureEntry) -> Citation {
    let LiteratureEntry { label, link, .. } = entry;
    Citation {
        label: label.clone(),
        link: link.clone(),
    }
}

/// Popup content of a single record.
#[must_use]
pub fn popup(record: &Record, literature: &LiteratureCatalog) -> Popup {
    if record.is_unpublished() {
        return Popup::Unpublished {
            japanese_name: record.japanese_name.to_string(),
            scientific_name: record.scientific_name.to_string(),
        };
    }
    let entry = literature.get(&record.literature_id);
    if entry.is_none() {
        log::debug!("Unresolved literature: {}", record.literature_id);
    }
    Popup::Published(Box::new(PublishedPopup {
        japanese_name: record.japanese_name.to_string(),
        scientific_name: record.scientific_name.to_string(),
        original_japanese_name: record.original_japanese_name.to_string(),
        original_scientific_name: record.original_scientific_name.to_string(),
        page: record.page.to_string(),
        location: record.location.to_string(),
        date: record.date.to_string(),
        note: record.note.to_string(),
        registrant: record.registrant.to_string(),
        registration_date: record.registration_date.to_string(),
        literature: entry.map(citation_of),
    }))
}

/// A marker for records with both coordinates.
#[must_use]
pub fn marker(record: &Record, literature: &LiteratureCatalog) -> Option<Marker> {
    let position = record.coordinates()?;
    Some(Marker {
        position,
        style: marker_style(record.record_type()),
        popup: popup(record, literature),
    })
}

/// Literature of the records that are placed on the map.
///
/// Each title is listed once in citation order. Among entries with
/// the same title the first in citation order wins. Unresolved
/// references are omitted.
#[must_use]
pub fn cited_literature<'a>(
    filtered: &[&Record],
    literature: &'a LiteratureCatalog,
) -> Vec<&'a LiteratureEntry> {
    filtered
        .iter()
        .filter(|record| record.coordinates().is_some() && !record.is_unpublished())
        .filter_map(|record| literature.get(&record.literature_id))
        .unique_by(|entry| &entry.id)
        .sorted_by(|lhs, rhs| lhs.cmp_citation_order(rhs))
        .unique_by(|entry| entry.label.as_str())
        .collect()
}

#[must_use]
pub fn build_projection(filtered: &[&Record], literature: &LiteratureCatalog) -> Projection {
    let summary = summarize(filtered);
    let markers = filtered
        .iter()
        .filter_map(|record| marker(record, literature))
        .collect::<Vec<_>>();
    debug_assert!(markers.len() <= summary.record_count);
    let citations = cited_literature(filtered, literature)
        .into_iter()
        .map(citation_of)
        .collect();
    Projection {
        summary,
        markers,
        citations,
    }
}
