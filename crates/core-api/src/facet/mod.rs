// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

use biomap_core::{Record, prelude::is_sentinel};
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator as _, IntoStaticStr};

/// An independently selectable filter dimension.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Facet {
    Species,
    Genus,
    Family,
    Order,
    Prefecture,
    Island,
    Literature,
}

impl Facet {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn taxon_rank(self) -> Option<TaxonRank> {
        match self {
            Self::Genus => Some(TaxonRank::Genus),
            Self::Family => Some(TaxonRank::Family),
            Self::Order => Some(TaxonRank::Order),
            Self::Species | Self::Prefecture | Self::Island | Self::Literature => None,
        }
    }

    /// The value of a record that is matched against a selection.
    #[must_use]
    pub fn value_of(self, record: &Record) -> Cow<'_, str> {
        match self {
            Self::Species => Cow::Owned(record.species_key()),
            Self::Genus => Cow::Borrowed(record.genus.as_str()),
            Self::Family => Cow::Borrowed(record.family.as_str()),
            Self::Order => Cow::Borrowed(record.order.as_str()),
            Self::Prefecture => Cow::Borrowed(record.prefecture.as_str()),
            Self::Island => Cow::Borrowed(record.island.as_str()),
            Self::Literature => Cow::Borrowed(record.literature_id.as_str()),
        }
    }

    #[must_use]
    pub fn matches(self, record: &Record, selected: &str) -> bool {
        self.value_of(record) == selected
    }
}

/// The taxonomic ranks above species.
///
/// Options of these facets are labeled with a translation of
/// the scientific name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum TaxonRank {
    Genus,
    Family,
    Order,
}

impl TaxonRank {
    #[must_use]
    pub const fn facet(self) -> Facet {
        match self {
            Self::Genus => Facet::Genus,
            Self::Family => Facet::Family,
            Self::Order => Facet::Order,
        }
    }

    #[must_use]
    pub const fn accessor(self) -> fn(&Record) -> &str {
        match self {
            Self::Genus => genus_of,
            Self::Family => family_of,
            Self::Order => order_of,
        }
    }

    #[must_use]
    pub fn value_of(self, record: &Record) -> &str {
        (self.accessor())(record)
    }
}

fn genus_of(record: &Record) -> &str {
    &record.genus
}

fn family_of(record: &Record) -> &str {
    &record.family
}

fn order_of(record: &Record) -> &str {
    &record.order
}

/// The selected value per facet.
///
/// An empty selection imposes no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetSelections {
    selected: [Option<String>; Facet::COUNT],
}

impl FacetSelections {
    #[must_use]
    pub fn get(&self, facet: Facet) -> Option<&str> {
        self.selected[facet.index()].as_deref()
    }

    /// Select a value.
    ///
    /// Selecting an empty value clears the facet. Returns `true`
    /// if the selection has changed.
    pub fn select(&mut self, facet: Facet, value: impl Into<String>) -> bool {
        let value = value.into();
        let new_selection = (!value.is_empty()).then_some(value);
        let selection = &mut self.selected[facet.index()];
        if *selection == new_selection {
            return false;
        }
        *selection = new_selection;
        true
    }

    pub fn clear(&mut self, facet: Facet) -> bool {
        self.selected[facet.index()].take().is_some()
    }

    pub fn clear_all(&mut self) -> bool {
        let mut cleared = false;
        for facet in Facet::all() {
            cleared |= self.clear(facet);
        }
        cleared
    }

    /// No facet is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.iter().all(Option::is_none)
    }

    /// All selected facets with their value.
    pub fn iter(&self) -> impl Iterator<Item = (Facet, &str)> {
        Facet::all().filter_map(|facet| self.get(facet).map(|value| (facet, value)))
    }
}

/// Exclusion toggles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Exclusion {
    /// Records without any literature reference.
    Unpublished,

    /// Records with a questionable classification.
    Dubious,

    /// Records cited from other literature.
    Citation,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Exclusions {
    pub unpublished: bool,
    pub dubious: bool,
    pub citation: bool,
}

impl Exclusions {
    #[must_use]
    pub const fn is_enabled(&self, exclusion: Exclusion) -> bool {
        match exclusion {
            Exclusion::Unpublished => self.unpublished,
            Exclusion::Dubious => self.dubious,
            Exclusion::Citation => self.citation,
        }
    }

    pub fn set(&mut self, exclusion: Exclusion, enabled: bool) -> bool {
        let flag = match exclusion {
            Exclusion::Unpublished => &mut self.unpublished,
            Exclusion::Dubious => &mut self.dubious,
            Exclusion::Citation => &mut self.citation,
        };
        if *flag == enabled {
            return false;
        }
        *flag = enabled;
        true
    }

    pub fn toggle(&mut self, exclusion: Exclusion) {
        let enabled = self.is_enabled(exclusion);
        self.set(exclusion, !enabled);
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        !(self.unpublished || self.dubious || self.citation)
    }
}

/// Identifies records that are citations of other records.
///
/// The source data marks original records with `"yes"` and cited
/// records with `"no"` while `"-"` stands for unknown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CitationPolicy {
    /// Records explicitly flagged as not original, i.e. `original == "no"`.
    #[default]
    NotOriginal,

    /// Records without an originality flag, i.e. `original == "-"`.
    UnknownOriginal,
}

impl CitationPolicy {
    pub const NOT_ORIGINAL_FLAG: &str = "no";

    #[must_use]
    pub fn is_citation(self, record: &Record) -> bool {
        match self {
            Self::NotOriginal => record.original == Self::NOT_ORIGINAL_FLAG,
            Self::UnknownOriginal => is_sentinel(&record.original),
        }
    }
}

/// The mutable state of an exploration session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacetState {
    pub selections: FacetSelections,
    pub exclusions: Exclusions,

    /// Narrows the selectable options, not the records.
    pub query: String,
}

impl FacetState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_selection(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.selections.select(facet, value);
        self
    }

    #[must_use]
    pub fn with_exclusion(mut self, exclusion: Exclusion) -> Self {
        self.exclusions.set(exclusion, true);
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }
}
