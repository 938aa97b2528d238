//! Keyword extraction and synthesis.
//!
//! Feature words come from structural names and UI strings found by the
//! analyzer. Synthesis merges them with the category keyword pool into a
//! comma-joined list that never exceeds the store's length budget and never
//! repeats a word already used in the title or subtitle.

use crate::fit::fit_prefix;
use crate::models::ProjectAnalysis;
use crate::tables::{
    self, GENERAL_STOP_WORDS, MIN_TOKEN_LEN, SINGULAR_EXCEPTIONS, STRUCTURAL_STOP_WORDS,
};
use std::collections::{BTreeSet, HashSet};

pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Strip a trailing "s" unless the word is a known exception or ends in
/// "ss", "us" or "is".
pub fn singularize(word: &str) -> String {
    if SINGULAR_EXCEPTIONS.contains(&word)
        || word.ends_with("ss")
        || word.ends_with("us")
        || word.ends_with("is")
    {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

/// Normalized, singular form used for every comparison.
pub fn canonical(word: &str) -> String {
    singularize(&normalize(word))
}

/// Split an identifier on case transitions: `HTTPServerView` gives
/// `HTTP`, `Server`, `View`; `workoutHistory` gives `workout`, `History`.
/// Digits and punctuation act as separators.
pub fn split_identifier(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut parts = Vec::new();
    let mut cur = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphabetic() {
            if !cur.is_empty() {
                parts.push(std::mem::take(&mut cur));
            }
            continue;
        }
        if let Some(prev) = cur.chars().last() {
            let next_lower = chars.get(i + 1).map_or(false, |n| n.is_lowercase());
            let lower_to_upper = prev.is_lowercase() && c.is_uppercase();
            let acronym_end = prev.is_uppercase() && c.is_uppercase() && next_lower;
            if lower_to_upper || acronym_end {
                parts.push(std::mem::take(&mut cur));
            }
        }
        cur.push(c);
    }
    if !cur.is_empty() {
        parts.push(cur);
    }
    parts
}

pub fn is_stop_word(token: &str) -> bool {
    STRUCTURAL_STOP_WORDS.contains(&token) || GENERAL_STOP_WORDS.contains(&token)
}

/// Lowercased tokens of a name or phrase, without stop words and short tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .flat_map(split_identifier)
        .map(|t| t.to_lowercase())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN && !is_stop_word(t))
        .collect()
}

/// Canonical words of free text, for building exclusion sets from a title or
/// subtitle.
pub fn word_set(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(canonical)
        .collect()
}

/// Feature-derived keyword candidates, most specific first: tab names, UI
/// titles, view names, model names, then integration domain words.
pub fn feature_keywords(analysis: &ProjectAnalysis) -> Vec<String> {
    let structural = analysis
        .tab_names
        .iter()
        .chain(analysis.features.iter())
        .chain(analysis.view_names.iter())
        .chain(analysis.model_names.iter())
        .flat_map(|s| tokenize(s));
    let integration_words = analysis
        .integrations
        .iter()
        .filter_map(|name| tables::integration(name))
        .flat_map(|i| i.keywords.iter().map(|k| k.to_string()));
    dedup_first(structural.chain(integration_words))
}

/// Generic keyword pool for the hinted categories, or the fallback pool.
pub fn category_pool(analysis: &ProjectAnalysis) -> Vec<String> {
    if analysis.category_hints.is_empty() {
        return tables::FALLBACK_PROFILE
            .keyword_pool
            .iter()
            .map(|s| s.to_string())
            .collect();
    }
    dedup_first(
        analysis
            .category_hints
            .iter()
            .flat_map(|c| tables::profile(*c).keyword_pool.iter())
            .map(|s| s.to_string()),
    )
}

fn dedup_first(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.filter(|s| seen.insert(s.clone())).collect()
}

/// Build the keyword field.
///
/// Candidates are canonicalized, anything matching `excluded` is dropped,
/// feature words keep priority over pool words, and words are appended until
/// the next one would push the joined length past `limit`.
pub fn synthesize<A, B, C>(
    feature_keywords: &[A],
    category_pool: &[B],
    excluded: &[C],
    limit: usize,
) -> String
where
    A: AsRef<str>,
    B: AsRef<str>,
    C: AsRef<str>,
{
    let excluded: HashSet<String> = excluded.iter().map(|w| canonical(w.as_ref())).collect();
    let candidates = feature_keywords
        .iter()
        .map(|w| w.as_ref())
        .chain(category_pool.iter().map(|w| w.as_ref()))
        .map(canonical)
        .filter(|w| !w.is_empty() && !w.contains(',') && !excluded.contains(w));
    let ordered = dedup_first(candidates);
    let keep = fit_prefix(&ordered, 1, limit);
    ordered[..keep].join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::tables::KEYWORDS_LIMIT;

    #[test]
    fn test_singularize_rules() {
        assert_eq!(singularize("workouts"), "workout");
        assert_eq!(singularize("analysis"), "analysis");
        assert_eq!(singularize("fitness"), "fitness");
        assert_eq!(singularize("status"), "status");
        assert_eq!(singularize("news"), "news");
        assert_eq!(singularize("recipe"), "recipe");
    }

    #[test]
    fn test_analysis_is_never_truncated() {
        let out = synthesize(&["analysis", "analyses"], &[] as &[&str], &[] as &[&str], 100);
        assert!(out.split(',').any(|w| w == "analysis"));
        assert!(!out.split(',').any(|w| w == "analysi"));
    }

    #[test]
    fn test_split_identifier_case_transitions() {
        assert_eq!(
            split_identifier("HTTPServerView"),
            vec!["HTTP", "Server", "View"]
        );
        assert_eq!(split_identifier("workoutHistory"), vec!["workout", "History"]);
        assert_eq!(split_identifier("Meal_Plan2Go"), vec!["Meal", "Plan", "Go"]);
    }

    #[test]
    fn test_tokenize_drops_stop_words_and_short_tokens() {
        assert_eq!(tokenize("WorkoutHistoryView"), vec!["workout", "history"]);
        assert_eq!(tokenize("AddMealSheet"), vec!["meal"]);
        assert!(tokenize("UIViewController").is_empty());
        assert_eq!(tokenize("Go to the Gym"), vec!["gym"]);
    }

    #[test]
    fn test_synthesize_respects_limit_and_order() {
        let features = ["workouts", "meals"];
        let pool = ["fitness", "tracker", "gym"];
        let out = synthesize(&features, &pool, &[] as &[&str], 20);
        assert_eq!(out, "workout,meal,fitness");
        assert!(out.chars().count() <= 20);
    }

    #[test]
    fn test_synthesize_stops_at_first_overflow() {
        let out = synthesize(&["aaaa", "bbbbbbbbbb", "cc"], &[] as &[&str], &[] as &[&str], 8);
        assert_eq!(out, "aaaa");
    }

    #[test]
    fn test_synthesize_excludes_title_words_after_singularizing() {
        let out = synthesize(
            &["workout", "recipes", "timer"],
            &["recipe", "meal"],
            &["Recipe", "Timers"],
            100,
        );
        assert_eq!(out, "workout,meal");
    }

    #[test]
    fn test_synthesize_is_deterministic() {
        let features = ["sleep", "heart", "steps", "journal"];
        let pool = tables::profile(Category::HealthFitness).keyword_pool;
        let a = synthesize(&features, pool, &["sleep"], KEYWORDS_LIMIT);
        let b = synthesize(&features, pool, &["sleep"], KEYWORDS_LIMIT);
        assert_eq!(a, b);
        assert!(a.chars().count() <= KEYWORDS_LIMIT);
        assert!(!a.split(',').any(|w| w == "sleep"));
    }

    #[test]
    fn test_length_invariant_over_varied_limits() {
        let pool = tables::profile(Category::Productivity).keyword_pool;
        for limit in 0..=KEYWORDS_LIMIT {
            let out = synthesize(&["checklists", "inbox"], pool, &["task"], limit);
            assert!(out.chars().count() <= limit, "limit {} gave {}", limit, out);
            assert!(!out.split(',').any(|w| w == "task"));
        }
    }

    #[test]
    fn test_feature_keywords_priority() {
        let mut a = ProjectAnalysis::default();
        a.tab_names.insert("Journal".into());
        a.view_names.insert("MoodChartView".into());
        a.integrations.insert("HealthKit".into());
        let kws = feature_keywords(&a);
        assert_eq!(kws[0], "journal");
        assert_eq!(&kws[1..3], &["mood", "chart"]);
        assert!(kws.contains(&"fitness".to_string()));
    }

    #[test]
    fn test_category_pool_fallback() {
        let a = ProjectAnalysis::default();
        assert_eq!(category_pool(&a)[0], "utility");
    }

    #[test]
    fn test_word_set_canonical() {
        let set = word_set("Recipes & Meal-Plans");
        assert!(set.contains("recipe"));
        assert!(set.contains("meal"));
        assert!(set.contains("plan"));
    }
}
