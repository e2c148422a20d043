// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use biomap_core_api::{Exclusion, Facet};

use super::*;
use crate::testing::{record, records};

fn positions(records: &[Record], filtered: &[&Record]) -> Vec<usize> {
    filtered
        .iter()
        .map(|filtered| {
            records
                .iter()
                .position(|record| std::ptr::eq(record, *filtered))
                .unwrap()
        })
        .collect()
}

#[test]
fn empty_state_returns_all_records_in_order() {
    let records = records();
    let filtered = evaluate(&records, &FacetState::new(), CitationPolicy::default());
    assert_eq!(vec![0, 1, 2, 3, 4], positions(&records, &filtered));
}

#[test]
fn query_does_not_filter_records() {
    let records = records();
    let state = FacetState::new().with_query("Bufo");
    let filtered = evaluate(&records, &state, CitationPolicy::default());
    assert_eq!(records.len(), filtered.len());
}

#[test]
fn single_facet_selection() {
    let records = records();
    let state = FacetState::new().with_selection(Facet::Genus, "Rana");
    let filtered = evaluate(&records, &state, CitationPolicy::default());
    assert_eq!(vec![0, 1, 4], positions(&records, &filtered));
}

#[test]
fn species_selection_uses_combined_key() {
    let records = records();
    let state = FacetState::new().with_selection(Facet::Species, "Rana sp. / カエル");
    let filtered = evaluate(&records, &state, CitationPolicy::default());
    assert_eq!(vec![0, 4], positions(&records, &filtered));
    // Neither part alone matches
    let state = FacetState::new().with_selection(Facet::Species, "Rana sp.");
    assert!(evaluate(&records, &state, CitationPolicy::default()).is_empty());
}

#[test]
fn selections_are_conjunctive() {
    let records = records();
    let state = FacetState::new()
        .with_selection(Facet::Genus, "Rana")
        .with_selection(Facet::Prefecture, "沖縄県");
    let filtered = evaluate(&records, &state, CitationPolicy::default());
    assert_eq!(vec![4], positions(&records, &filtered));
    let state = state.with_selection(Facet::Island, "本州");
    assert!(evaluate(&records, &state, CitationPolicy::default()).is_empty());
}

#[test]
fn selected_values_hold_for_all_filtered_records() {
    let records = records();
    for facet in Facet::all() {
        for record in &records {
            let value = facet.value_of(record).into_owned();
            let state = FacetState::new().with_selection(facet, value.clone());
            let filtered = evaluate(&records, &state, CitationPolicy::default());
            assert!(filtered.iter().all(|filtered| facet.value_of(filtered) == value));
            let mut rejected = records
                .iter()
                .filter(|record| !filtered.iter().any(|filtered| std::ptr::eq(*record, *filtered)));
            assert!(rejected.all(|record| facet.value_of(record) != value));
        }
    }
}

#[test]
fn selected_species_of_a_record_includes_that_record() {
    let records = records();
    for record in &records {
        let state = FacetState::new().with_selection(Facet::Species, record.species_key());
        let filtered = evaluate(&records, &state, CitationPolicy::default());
        assert!(filtered.iter().any(|filtered| std::ptr::eq(*filtered, record)));
    }
}

#[test]
fn exclude_unpublished() {
    let mut records = records();
    records[0].literature_id = "".into();
    let state = FacetState::new().with_exclusion(Exclusion::Unpublished);
    let filtered = evaluate(&records, &state, CitationPolicy::default());
    assert_eq!(vec![2, 3, 4], positions(&records, &filtered));
}

#[test]
fn exclude_dubious() {
    let records = records();
    let state = FacetState::new().with_exclusion(Exclusion::Dubious);
    let filtered = evaluate(&records, &state, CitationPolicy::default());
    assert_eq!(vec![0, 1, 3], positions(&records, &filtered));
    // Excluded records are still present
    assert_eq!(5, records.len());
}

#[test]
fn exclude_citations_flagged_as_not_original() {
    let records = records();
    let state = FacetState::new().with_exclusion(Exclusion::Citation);
    let filtered = evaluate(&records, &state, CitationPolicy::NotOriginal);
    assert_eq!(vec![0, 1, 3], positions(&records, &filtered));
}

#[test]
fn exclude_citations_without_originality_flag() {
    let records = records();
    let state = FacetState::new().with_exclusion(Exclusion::Citation);
    let filtered = evaluate(&records, &state, CitationPolicy::UnknownOriginal);
    assert_eq!(vec![0, 2, 3, 4], positions(&records, &filtered));
}

#[test]
fn exclusions_apply_before_selections() {
    let records = records();
    let state = FacetState::new()
        .with_selection(Facet::Species, "Rana sp. / カエル")
        .with_exclusion(Exclusion::Dubious);
    let filtered = evaluate(&records, &state, CitationPolicy::default());
    assert_eq!(vec![0], positions(&records, &filtered));
}

#[test]
fn unknown_record_types_are_never_dubious() {
    let records = vec![record(
        "questionable",
        ("Rana sp.", "カエル"),
        ("Rana", "Ranidae", "Anura"),
        ("東京都", "本州"),
        "L1",
        "yes",
        None,
    )];
    let state = FacetState::new().with_exclusion(Exclusion::Dubious);
    assert_eq!(1, evaluate(&records, &state, CitationPolicy::default()).len());
}
