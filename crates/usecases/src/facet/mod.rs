// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::cmp::Ordering;

use hashbrown::HashSet;
use itertools::Itertools as _;

use biomap_core::{
    Catalogs, LiteratureCatalog, Record, RegionOrder, TaxonMap, prelude::is_sentinel,
};
use biomap_core_api::{
    DefaultTexts, Facet, FacetOption, FacetOptionLists, FacetOptions, TaxonRank, TextQuery,
};

/// Lexical order with the sentinel last.
#[must_use]
pub fn cmp_sentinel_last(lhs: &str, rhs: &str) -> Ordering {
    is_sentinel(lhs)
        .cmp(&is_sentinel(rhs))
        .then_with(|| lhs.cmp(rhs))
}

/// Combined species keys, sorted lexically.
#[must_use]
pub fn species_options(filtered: &[&Record], query: &TextQuery) -> Vec<FacetOption> {
    filtered
        .iter()
        .map(|record| record.species_key())
        .unique()
        .filter(|species_key| query.matches(species_key))
        .sorted()
        .map(FacetOption::plain)
        .collect()
}

/// Taxa of a higher rank, labeled with their translation.
///
/// The query is matched against the label. Unknown taxa are
/// sorted last.
#[must_use]
pub fn taxon_options(
    rank: TaxonRank,
    filtered: &[&Record],
    taxon_map: &TaxonMap,
    query: &TextQuery,
) -> Vec<FacetOption> {
    filtered
        .iter()
        .map(|record| rank.value_of(record))
        .filter(|value| !value.is_empty())
        .unique()
        .map(|value| {
            let translation = taxon_map.translate_or_sentinel(value);
            FacetOption::new(value, format!("{value} / {translation}"))
        })
        .filter(|option| query.matches(&option.label))
        .sorted_by(|lhs, rhs| cmp_sentinel_last(&lhs.value, &rhs.value))
        .collect()
}

/// Regions in canonical order that occur in the filtered records.
#[must_use]
pub fn region_options(
    region_order: &RegionOrder,
    filtered: &[&Record],
    region_of: fn(&Record) -> &str,
    query: &TextQuery,
) -> Vec<FacetOption> {
    let present = filtered
        .iter()
        .map(|record| region_of(record))
        .collect::<HashSet<_>>();
    region_order
        .iter_unique()
        .filter(|name| present.contains(name) && query.matches(name))
        .map(FacetOption::plain)
        .collect()
}

/// Literature referenced by the filtered records in catalog order.
#[must_use]
pub fn literature_options(
    literature: &LiteratureCatalog,
    filtered: &[&Record],
    query: &TextQuery,
) -> Vec<FacetOption> {
    let referenced = filtered
        .iter()
        .map(|record| record.literature_id.as_str())
        .collect::<HashSet<_>>();
    literature
        .iter()
        .filter(|entry| referenced.contains(entry.id.as_str()) && query.matches(&entry.label))
        .map(|entry| FacetOption {
            value: entry.id.to_string(),
            label: entry.label.clone(),
            rank: Some(entry.order),
        })
        .collect()
}

fn prefecture_of(record: &Record) -> &str {
    &record.prefecture
}

fn island_of(record: &Record) -> &str {
    &record.island
}

/// Derive the selectable options of a single facet.
#[must_use]
pub fn facet_options(
    facet: Facet,
    filtered: &[&Record],
    catalogs: &Catalogs,
    query: &TextQuery,
) -> Vec<FacetOption> {
    match facet {
        Facet::Species => species_options(filtered, query),
        Facet::Genus => taxon_options(TaxonRank::Genus, filtered, &catalogs.taxon_map, query),
        Facet::Family => taxon_options(TaxonRank::Family, filtered, &catalogs.taxon_map, query),
        Facet::Order => taxon_options(TaxonRank::Order, filtered, &catalogs.taxon_map, query),
        Facet::Prefecture => {
            region_options(&catalogs.prefecture_order, filtered, prefecture_of, query)
        }
        Facet::Island => region_options(&catalogs.island_order, filtered, island_of, query),
        Facet::Literature => literature_options(&catalogs.literature, filtered, query),
    }
}

/// Derive the selectable options of all facets.
#[must_use]
pub fn derive_options(
    filtered: &[&Record],
    catalogs: &Catalogs,
    query: &TextQuery,
    default_texts: &DefaultTexts,
) -> FacetOptionLists {
    let lists = Facet::all()
        .map(|facet| {
            let options = facet_options(facet, filtered, catalogs, query);
            log::debug!("{num_options} option(s) for {facet}", num_options = options.len());
            FacetOptions::new(facet, default_texts.get(facet), options)
        })
        .collect();
    FacetOptionLists::new(lists)
}
