//! Result of the lexical scan over a project's source tree.

use super::Category;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Structured signals inferred from a source tree. Built once per run and
/// never mutated afterwards; every collection is deduplicated.
pub struct ProjectAnalysis {
    /// Human-readable titles and labels, capped to `tables::FEATURE_CAP`.
    pub features: BTreeSet<String>,
    /// Canonical names from `tables::INTEGRATIONS`.
    pub integrations: BTreeSet<String>,
    pub view_names: BTreeSet<String>,
    pub model_names: BTreeSet<String>,
    pub tab_names: BTreeSet<String>,
    pub has_subscription: bool,
    /// May be empty; downstream falls back to `Category::FALLBACK`.
    pub category_hints: BTreeSet<Category>,
    pub readme_excerpt: String,
}

impl ProjectAnalysis {
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
            && self.integrations.is_empty()
            && self.view_names.is_empty()
            && self.model_names.is_empty()
            && self.tab_names.is_empty()
            && self.category_hints.is_empty()
            && self.readme_excerpt.is_empty()
    }

    /// First hinted category in taxonomy order, or the fallback.
    pub fn primary_category(&self) -> Category {
        self.category_hints
            .iter()
            .next()
            .copied()
            .unwrap_or(Category::FALLBACK)
    }

    pub fn secondary_category(&self) -> Option<Category> {
        self.category_hints.iter().nth(1).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_and_falls_back() {
        let a = ProjectAnalysis::default();
        assert!(a.is_empty());
        assert_eq!(a.primary_category(), Category::FALLBACK);
        assert_eq!(a.secondary_category(), None);
    }

    #[test]
    fn test_primary_follows_taxonomy_order() {
        let mut a = ProjectAnalysis::default();
        a.category_hints.insert(Category::Games);
        a.category_hints.insert(Category::Finance);
        assert_eq!(a.primary_category(), Category::Finance);
        assert_eq!(a.secondary_category(), Some(Category::Games));
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut a = ProjectAnalysis::default();
        a.has_subscription = true;
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["hasSubscription"], true);
        assert!(v["categoryHints"].as_array().unwrap().is_empty());
    }
}
