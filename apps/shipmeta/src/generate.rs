//! Copy generator: subtitle, description and promotional text.
//!
//! All copy is assembled from the static templates in `tables`, so the same
//! analysis and app name always produce byte-identical output.

use crate::fit::first_fit;
use crate::keywords::{self, word_set};
use crate::models::{Field, MetadataRecord, ProjectAnalysis};
use crate::tables::{
    self, CALL_TO_ACTION, DESCRIPTION_LIMIT, KEYWORDS_LIMIT, MAX_FEATURE_BULLETS, PROMO_LIMIT,
    SUBSCRIPTION_TERMS, SUBTITLE_LIMIT,
};
use crate::utils::{truncate_chars, truncate_words};
use std::collections::BTreeSet;
use tracing::warn;

/// Most words a subtitle may share with the title and keywords.
const MAX_SUBTITLE_OVERLAP: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Chosen subtitle. `degraded` is set when no candidate met every
/// constraint and a fallback was taken instead.
pub struct SubtitlePick {
    pub text: String,
    pub degraded: bool,
}

#[derive(Debug, Clone)]
pub struct ListingCopy {
    pub subtitle: SubtitlePick,
    pub description: String,
    pub promotional_text: String,
}

#[derive(Debug, Clone)]
/// A generated record plus what the generator had to compromise on.
pub struct Generated {
    pub record: MetadataRecord,
    pub subtitle_degraded: bool,
}

fn overlap(phrase: &str, excluded: &BTreeSet<String>) -> usize {
    word_set(phrase).intersection(excluded).count()
}

/// First candidate within the length limit that shares at most one word
/// with `excluded`.
///
/// Degrade path: with no such candidate, the first candidate within the
/// length limit is used; if none fits at all, the first candidate is cut at
/// a word boundary. Both cases set `degraded`.
pub fn choose_subtitle(candidates: &[&str], excluded: &BTreeSet<String>) -> SubtitlePick {
    let fits = |c: &&&str| c.chars().count() <= SUBTITLE_LIMIT;
    if let Some(c) = first_fit(candidates.iter(), |c| {
        fits(c) && overlap(c, excluded) <= MAX_SUBTITLE_OVERLAP
    }) {
        return SubtitlePick {
            text: c.to_string(),
            degraded: false,
        };
    }
    let text = match first_fit(candidates.iter(), fits) {
        Some(c) => c.to_string(),
        None => candidates
            .first()
            .map(|c| truncate_words(c, SUBTITLE_LIMIT).to_string())
            .unwrap_or_default(),
    };
    warn!(subtitle = %text, "no subtitle candidate met all constraints");
    SubtitlePick {
        text,
        degraded: true,
    }
}

/// Subtitle for the analysis' primary category (or the generic list).
pub fn subtitle(analysis: &ProjectAnalysis, excluded: &BTreeSet<String>) -> SubtitlePick {
    let profile = tables::profile(analysis.primary_category());
    choose_subtitle(profile.subtitles, excluded)
}

/// Feature bullets: up to `MAX_FEATURE_BULLETS` UI features (tab names when
/// no titles were found), then one bullet per integration that has one.
pub fn feature_bullets(analysis: &ProjectAnalysis) -> Vec<String> {
    let structural = if analysis.features.is_empty() {
        &analysis.tab_names
    } else {
        &analysis.features
    };
    let mut bullets: Vec<String> = structural
        .iter()
        .take(MAX_FEATURE_BULLETS)
        .cloned()
        .collect();
    for name in &analysis.integrations {
        if let Some(b) = tables::integration(name).and_then(|i| i.bullet) {
            if !bullets.iter().any(|x| x == b) {
                bullets.push(b.to_string());
            }
        }
    }
    bullets
}

pub fn description(analysis: &ProjectAnalysis, app_name: &str) -> String {
    let profile = tables::profile(analysis.primary_category());
    let mut sections: Vec<String> = vec![profile.hook.to_string()];

    let bullets = feature_bullets(analysis);
    if !bullets.is_empty() {
        let list: Vec<String> = bullets.iter().map(|b| format!("• {}", b)).collect();
        sections.push(format!("KEY FEATURES\n{}", list.join("\n")));
    }
    sections.push(format!("PERFECT FOR\n{}", profile.audience));
    if analysis.has_subscription {
        sections.push(SUBSCRIPTION_TERMS.to_string());
    }
    sections.push(CALL_TO_ACTION.replace("{app}", app_name));

    let text = sections.join("\n\n");
    truncate_chars(&text, DESCRIPTION_LIMIT).to_string()
}

pub fn promotional_text(analysis: &ProjectAnalysis, app_name: &str) -> String {
    let profile = tables::profile(analysis.primary_category());
    let text = profile.promo.replace("{app}", app_name);
    truncate_chars(&text, PROMO_LIMIT).to_string()
}

/// Subtitle, description and promotional text. The subtitle avoids words in
/// `title_words` and `keyword_words`.
pub fn generate_copy<S: AsRef<str>>(
    analysis: &ProjectAnalysis,
    app_name: &str,
    title_words: &[S],
    keyword_words: &[S],
) -> ListingCopy {
    let excluded: BTreeSet<String> = title_words
        .iter()
        .chain(keyword_words.iter())
        .map(|w| keywords::canonical(w.as_ref()))
        .collect();
    ListingCopy {
        subtitle: subtitle(analysis, &excluded),
        description: description(analysis, app_name),
        promotional_text: promotional_text(analysis, app_name),
    }
}

/// Full candidate record for `app_name`.
///
/// The subtitle is chosen against the title and the candidate keywords; the
/// keyword field is then synthesized excluding every title and subtitle word.
pub fn generate_record(analysis: &ProjectAnalysis, app_name: &str, locale: &str) -> Generated {
    let title_words: Vec<String> = word_set(app_name).into_iter().collect();
    let features = keywords::feature_keywords(analysis);
    let pool = keywords::category_pool(analysis);
    let keyword_words: Vec<String> = features.iter().chain(pool.iter()).cloned().collect();

    let copy = generate_copy(analysis, app_name, &title_words, &keyword_words);

    let mut excluded = title_words;
    excluded.extend(word_set(&copy.subtitle.text));
    let keywords = keywords::synthesize(&features, &pool, &excluded, KEYWORDS_LIMIT);

    let mut record = MetadataRecord::default()
        .with(Field::Locale, locale)
        .with(Field::Subtitle, copy.subtitle.text)
        .with(Field::Keywords, keywords)
        .with(Field::Description, copy.description)
        .with(Field::PromotionalText, copy.promotional_text)
        .with(Field::PrimaryCategory, analysis.primary_category().store_id());
    if let Some(second) = analysis.secondary_category() {
        record = record.with(Field::SecondaryCategory, second.store_id());
    }
    Generated {
        record,
        subtitle_degraded: copy.subtitle.degraded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn fitness_app(subscription: bool) -> ProjectAnalysis {
        let mut a = ProjectAnalysis::default();
        a.features.insert("Today".into());
        a.features.insert("Workouts".into());
        a.tab_names.insert("History".into());
        a.view_names.insert("WorkoutListView".into());
        a.integrations.insert("HealthKit".into());
        a.integrations.insert("CloudKit".into());
        if subscription {
            a.integrations.insert("StoreKit".into());
        }
        a.has_subscription = subscription;
        a.category_hints.insert(Category::HealthFitness);
        a
    }

    fn words(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_choose_subtitle_first_fit_with_overlap_tolerance() {
        let cands = ["Move More, Feel Stronger", "Train Smarter Every Day"];
        // one shared word is tolerated
        let pick = choose_subtitle(&cands, &words(&["move"]));
        assert_eq!(pick.text, "Move More, Feel Stronger");
        assert!(!pick.degraded);
        // two shared words skip to the next candidate
        let pick = choose_subtitle(&cands, &words(&["move", "more"]));
        assert_eq!(pick.text, "Train Smarter Every Day");
        assert!(!pick.degraded);
    }

    #[test]
    fn test_choose_subtitle_degrades_on_overlap() {
        let cands = ["Move More", "More Move"];
        let pick = choose_subtitle(&cands, &words(&["move", "more"]));
        assert_eq!(pick.text, "Move More");
        assert!(pick.degraded);
    }

    #[test]
    fn test_choose_subtitle_lossy_truncation_is_flagged() {
        let cands = ["An Extremely Long Subtitle That Cannot Possibly Fit"];
        let pick = choose_subtitle(&cands, &BTreeSet::new());
        assert!(pick.degraded);
        assert!(pick.text.chars().count() <= SUBTITLE_LIMIT);
        assert_eq!(pick.text, "An Extremely Long Subtitle");
    }

    #[test]
    fn test_static_candidates_never_need_truncation() {
        for c in Category::TAXONOMY.iter().chain([Category::FALLBACK].iter()) {
            let pick = choose_subtitle(tables::profile(*c).subtitles, &BTreeSet::new());
            assert!(!pick.degraded);
        }
    }

    #[test]
    fn test_subscription_terms_only_when_subscribed() {
        let with = description(&fitness_app(true), "Pulse");
        let without = description(&fitness_app(false), "Pulse");
        assert!(with.contains(SUBSCRIPTION_TERMS));
        assert!(!without.contains("automatically renew"));
    }

    #[test]
    fn test_description_sections_and_bullets() {
        let d = description(&fitness_app(false), "Pulse");
        assert!(d.starts_with(tables::profile(Category::HealthFitness).hook));
        assert!(d.contains("KEY FEATURES\n• Today\n• Workouts"));
        assert!(d.contains(&format!("• {}", tables::SYNC_BULLET)));
        assert!(d.contains("PERFECT FOR\n"));
        assert!(d.ends_with("Download Pulse today and see the difference for yourself."));
    }

    #[test]
    fn test_feature_bullets_capped() {
        let mut a = ProjectAnalysis::default();
        for i in 0..10 {
            a.features.insert(format!("Feature {}", i));
        }
        a.integrations.insert("CloudKit".into());
        let b = feature_bullets(&a);
        assert_eq!(b.len(), MAX_FEATURE_BULLETS + 1);
        assert_eq!(b.last().map(String::as_str), Some(tables::SYNC_BULLET));
    }

    #[test]
    fn test_description_hard_truncated() {
        let mut a = fitness_app(true);
        a.features = (0..6).map(|i| format!("{} {}", i, "x".repeat(900))).collect();
        let d = description(&a, "Pulse");
        assert_eq!(d.chars().count(), DESCRIPTION_LIMIT);
    }

    #[test]
    fn test_promo_interpolates_and_truncates() {
        let a = fitness_app(false);
        assert!(promotional_text(&a, "Pulse").starts_with("Pulse makes every workout count."));
        let long_name = "N".repeat(200);
        assert_eq!(promotional_text(&a, &long_name).chars().count(), PROMO_LIMIT);
    }

    #[test]
    fn test_fallback_copy_for_empty_analysis() {
        let g = generate_record(&ProjectAnalysis::default(), "Gizmo", "en-US");
        let r = &g.record;
        assert!(!r.subtitle.as_deref().unwrap_or("").is_empty());
        assert!(!r.description.as_deref().unwrap_or("").is_empty());
        assert!(!r.promotional_text.as_deref().unwrap_or("").is_empty());
        assert_eq!(r.primary_category.as_deref(), Some("UTILITIES"));
        assert_eq!(r.secondary_category, None);
        assert!(!g.subtitle_degraded);
    }

    #[test]
    fn test_generated_record_respects_limits_and_exclusion() {
        let g = generate_record(&fitness_app(true), "Pulse Workout", "en-US");
        let r = &g.record;
        let subtitle = r.subtitle.as_deref().unwrap();
        let kw = r.keywords.as_deref().unwrap();
        assert!(subtitle.chars().count() <= SUBTITLE_LIMIT);
        assert!(kw.chars().count() <= KEYWORDS_LIMIT);
        assert!(r.promotional_text.as_deref().unwrap().chars().count() <= PROMO_LIMIT);
        assert!(r.description.as_deref().unwrap().chars().count() <= DESCRIPTION_LIMIT);

        let banned: BTreeSet<String> = word_set("Pulse Workout")
            .into_iter()
            .chain(word_set(subtitle))
            .collect();
        for w in kw.split(',') {
            assert!(!banned.contains(w), "keyword {} repeats title/subtitle", w);
        }
        assert_eq!(r.locale.as_deref(), Some("en-US"));
        assert_eq!(r.primary_category.as_deref(), Some("HEALTH_AND_FITNESS"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = fitness_app(true);
        let x = generate_record(&a, "Pulse", "en-US").record;
        let y = generate_record(&a, "Pulse", "en-US").record;
        assert_eq!(
            serde_json::to_string(&x).unwrap(),
            serde_json::to_string(&y).unwrap()
        );
    }
}
