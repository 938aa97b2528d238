//! Category classification from integrations and keyword density.

use crate::models::Category;
use crate::tables::{self, CategoryProfile, CATEGORY_PROFILES, DENSITY_THRESHOLD};
use std::collections::BTreeSet;
use tracing::debug;

/// Union of integration-implied categories and density-hinted categories.
///
/// There is no ranking: every qualifying category is returned, and an empty
/// set is a valid answer.
pub fn classify<S: AsRef<str>>(integrations: &BTreeSet<S>, text: &str) -> BTreeSet<Category> {
    let mut hints: BTreeSet<Category> = integrations
        .iter()
        .filter_map(|name| tables::integration(name.as_ref()))
        .filter_map(|i| i.category)
        .collect();

    let lower = text.to_lowercase();
    for profile in CATEGORY_PROFILES {
        let hits = density_hits(profile, &lower);
        if hits.len() >= DENSITY_THRESHOLD {
            debug!(category = %profile.category, words = ?hits, "density hint");
            hints.insert(profile.category);
        }
    }
    hints
}

/// Distinct signal words of `profile` found in already-lowercased text.
pub fn density_hits(profile: &CategoryProfile, lower_text: &str) -> Vec<&'static str> {
    profile
        .signals
        .iter()
        .copied()
        .filter(|w| lower_text.contains(w))
        .collect()
}
