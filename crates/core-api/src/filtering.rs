// SPDX-FileCopyrightText: Copyright (C) 2018-2024 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Free-text query for narrowing option lists.
///
/// Matches case-insensitive substrings (contains). An empty query
/// matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextQuery {
    folded: String,
}

impl TextQuery {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            folded: fold_case(query),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        if self.is_empty() {
            return true;
        }
        fold_case(text).contains(&self.folded)
    }
}

fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        let query = TextQuery::new("");
        assert!(query.is_empty());
        assert!(query.matches(""));
        assert!(query.matches("Rana sp. / カエル"));
    }

    #[test]
    fn case_insensitive_contains() {
        let query = TextQuery::new("rAN");
        assert!(query.matches("Rana sp. / カエル"));
        assert!(query.matches("Ranidae / アカガエル科"));
        assert!(!query.matches("Bufo / ヒキガエル属"));
    }

    #[test]
    fn match_japanese_substrings() {
        let query = TextQuery::new("ガエル");
        assert!(query.matches("Rana / アカガエル属"));
        assert!(!query.matches("Hynobius / サンショウウオ属"));
    }
}
