// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::time::Instant;

use biomap_core::{Record, RecordStore};
use biomap_core_api::{
    Citation, CitationPolicy, DefaultTexts, FacetOptionLists, FacetState, Marker, Projection,
    Summary, TextQuery,
};

use crate::{facet::derive_options, filter::evaluate, projection::build_projection};

/// Parameters that stay fixed between recompute cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pub citation_policy: CitationPolicy,
    pub default_texts: DefaultTexts,
}

/// The outcome of a single recompute cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult<'a> {
    /// Filtered records in store order.
    pub records: Vec<&'a Record>,

    pub options: FacetOptionLists,

    pub projection: Projection,
}

impl FilterResult<'_> {
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.projection.summary
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.projection.markers
    }

    #[must_use]
    pub fn citations(&self) -> &[Citation] {
        &self.projection.citations
    }
}

/// Evaluate the facet state and derive everything that depends on it.
///
/// Pure function of its arguments. Invoking it repeatedly with the
/// same arguments produces equal results.
#[must_use]
pub fn recompute<'a>(store: &'a RecordStore, state: &FacetState, params: &Params) -> FilterResult<'a> {
    let timed = Instant::now();
    let Params {
        citation_policy,
        default_texts,
    } = params;
    let records = evaluate(store.records(), state, *citation_policy);
    let query = TextQuery::new(&state.query);
    let options = derive_options(&records, store.catalogs(), &query, default_texts);
    let projection = build_projection(&records, store.literature());
    log::debug!(
        "Recomputing {num_filtered} of {num_records} record(s) took {elapsed_ms} ms",
        num_filtered = records.len(),
        num_records = store.len(),
        elapsed_ms = (timed.elapsed().as_micros() / 1000) as f64,
    );
    FilterResult {
        records,
        options,
        projection,
    }
}
