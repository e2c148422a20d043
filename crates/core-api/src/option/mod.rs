// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::facet::Facet;

/// A selectable option of a facet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacetOption {
    /// The value that is selected.
    pub value: String,

    /// The display label.
    pub label: String,

    /// Citation rank of literature options.
    pub rank: Option<i64>,
}

impl FacetOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            rank: None,
        }
    }

    /// Value and label are the same.
    #[must_use]
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            rank: None,
        }
    }
}

/// All selectable options of a facet in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacetOptions {
    pub facet: Facet,

    /// Label of the default, i.e. empty, option.
    ///
    /// Includes the number of selectable options.
    pub default_label: String,

    pub options: Vec<FacetOption>,
}

impl FacetOptions {
    #[must_use]
    pub fn new(facet: Facet, default_text: &str, options: Vec<FacetOption>) -> Self {
        let default_label = default_label(default_text, options.len());
        Self {
            facet,
            default_label,
            options,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|option| option.value.as_str())
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values().any(|option_value| option_value == value)
    }
}

/// Format the label of the default option.
#[must_use]
pub fn default_label(default_text: &str, count: usize) -> String {
    format!("{default_text}（{count}件）")
}

/// Options of every facet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacetOptionLists {
    lists: Vec<FacetOptions>,
}

impl FacetOptionLists {
    /// Collect the options of all facets.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the lists are not given for each facet in order.
    #[must_use]
    pub fn new(lists: Vec<FacetOptions>) -> Self {
        debug_assert!(lists.iter().map(|list| list.facet).eq(Facet::all()));
        Self { lists }
    }

    #[must_use]
    pub fn get(&self, facet: Facet) -> &FacetOptions {
        &self.lists[facet.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &FacetOptions> {
        self.lists.iter()
    }
}

impl Default for FacetOptionLists {
    fn default() -> Self {
        let texts = DefaultTexts::default();
        Self::new(
            Facet::all()
                .map(|facet| FacetOptions::new(facet, texts.get(facet), Vec::new()))
                .collect(),
        )
    }
}

/// Display texts of the default option per facet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DefaultTexts {
    pub species: String,
    pub genus: String,
    pub family: String,
    pub order: String,
    pub prefecture: String,
    pub island: String,
    pub literature: String,
}

impl DefaultTexts {
    #[must_use]
    pub fn get(&self, facet: Facet) -> &str {
        match facet {
            Facet::Species => &self.species,
            Facet::Genus => &self.genus,
            Facet::Family => &self.family,
            Facet::Order => &self.order,
            Facet::Prefecture => &self.prefecture,
            Facet::Island => &self.island,
            Facet::Literature => &self.literature,
        }
    }
}

impl Default for DefaultTexts {
    fn default() -> Self {
        Self {
            species: "種を選択".to_owned(),
            genus: "属を選択".to_owned(),
            family: "科を選択".to_owned(),
            order: "目を選択".to_owned(),
            prefecture: "都道府県を選択".to_owned(),
            island: "島を選択".to_owned(),
            literature: "文献を選択".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_label_counts_options() {
        let options = FacetOptions::new(
            Facet::Genus,
            "属を選択",
            vec![FacetOption::plain("Rana"), FacetOption::plain("Bufo")],
        );
        assert_eq!("属を選択（2件）", options.default_label);
        assert!(options.contains("Bufo"));
        assert!(!options.contains("Hyla"));
    }

    #[test]
    fn default_lists_are_empty() {
        let lists = FacetOptionLists::default();
        assert_eq!(7, lists.iter().count());
        for facet in Facet::all() {
            let options = lists.get(facet);
            assert_eq!(facet, options.facet);
            assert!(options.is_empty());
            assert!(options.default_label.ends_with("（0件）"));
        }
        assert_eq!("島を選択（0件）", lists.get(Facet::Island).default_label);
    }
}
