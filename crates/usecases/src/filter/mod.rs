// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::time::Instant;

use biomap_core::Record;
use biomap_core_api::{CitationPolicy, Exclusions, FacetSelections, FacetState};

/// Check the exclusion toggles.
///
/// Independent of any facet selection.
#[must_use]
pub fn is_excluded(record: &Record, exclusions: &Exclusions, citation_policy: CitationPolicy) -> bool {
    let Exclusions {
        unpublished,
        dubious,
        citation,
    } = *exclusions;
    (unpublished && record.is_unpublished())
        || (dubious && record.is_questionable())
        || (citation && citation_policy.is_citation(record))
}

/// Check all selected facets.
///
/// Unselected facets impose no constraint.
#[must_use]
pub fn matches_selections(record: &Record, selections: &FacetSelections) -> bool {
    selections
        .iter()
        .all(|(facet, selected)| facet.matches(record, selected))
}

/// Filter the records by the current facet state.
///
/// The free-text query does not affect the filtered records, it only
/// narrows the selectable options. The relative order of the records
/// is preserved.
#[must_use]
pub fn evaluate<'a>(
    records: &'a [Record],
    state: &FacetState,
    citation_policy: CitationPolicy,
) -> Vec<&'a Record> {
    let timed = Instant::now();
    let FacetState {
        selections,
        exclusions,
        query: _,
    } = state;
    let not_excluded = records
        .iter()
        .filter(|record| !is_excluded(record, exclusions, citation_policy));
    let filtered = if selections.is_empty() {
        // Nothing selected: all remaining records pass
        not_excluded.collect::<Vec<_>>()
    } else {
        not_excluded
            .filter(|record| matches_selections(record, selections))
            .collect()
    };
    #[cfg(feature = "expensive-debug-assertions")]
    debug_assert!(
        filtered
            .iter()
            .all(|record| matches_selections(record, selections))
    );
    log::debug!(
        "Filtering {num_records} record(s) returned {num_filtered} and took {elapsed_ms} ms",
        num_records = records.len(),
        num_filtered = filtered.len(),
        elapsed_ms = (timed.elapsed().as_micros() / 1000) as f64,
    );
    filtered
}

#[cfg(test)]
mod tests;
