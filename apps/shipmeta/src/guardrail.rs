//! Content guardrails for store metadata.
//!
//! `validate` flags unverifiable contact or identity content (emails, URLs,
//! phone numbers, social handles) as WARN and length-limit violations as
//! BLOCK. `enforce` turns the findings into an upload decision.

use crate::models::{Decision, Field, GuardrailWarning, MetadataRecord, Severity, Summary};
use crate::tables::{ALLOWED_URL_PREFIXES, FIELD_LIMITS};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use tracing::{info, warn};

struct ContentPattern {
    label: &'static str,
    regex: Regex,
}

static CONTENT_PATTERNS: Lazy<Vec<ContentPattern>> = Lazy::new(|| {
    [
        ("email address", r"[\w.-]+@[\w.-]+\.\w+"),
        ("URL", r"https?://[\w.-]+\.\w+[/\w.-]*"),
        ("phone number", r"\+?\d[\d\s\-()]{7,}\d"),
        ("social media handle", r"@[A-Za-z]\w{2,}"),
    ]
    .into_iter()
    .map(|(label, re)| ContentPattern {
        label,
        regex: Regex::new(re).unwrap(),
    })
    .collect()
});

fn is_allowed(matched: &str) -> bool {
    ALLOWED_URL_PREFIXES.iter().any(|p| matched.starts_with(p))
}

/// Scan one text field for contact and identity content.
pub fn scan_text(field: Field, text: &str) -> Vec<GuardrailWarning> {
    let mut out = Vec::new();
    for pat in CONTENT_PATTERNS.iter() {
        for m in pat.regex.find_iter(text) {
            if is_allowed(m.as_str()) {
                continue;
            }
            out.push(GuardrailWarning::new(
                field.name(),
                Severity::Warn,
                format!("contains {}: \"{}\"", pat.label, m.as_str()),
            ));
        }
    }
    out
}

/// Character-limit check; BLOCK on violation.
pub fn check_limits(record: &MetadataRecord) -> Vec<GuardrailWarning> {
    FIELD_LIMITS
        .iter()
        .filter_map(|(field, limit)| {
            let len = record.get(*field)?.chars().count();
            (len > *limit).then(|| {
                GuardrailWarning::new(
                    field.name(),
                    Severity::Block,
                    format!("exceeds {} char limit ({} chars)", limit, len),
                )
            })
        })
        .collect()
}

/// Keyword field hygiene: comma-adjacent whitespace and repeated tokens.
pub fn check_keywords(keywords: &str) -> Vec<GuardrailWarning> {
    let mut out = Vec::new();
    if keywords.contains(" ,") || keywords.contains(", ") {
        out.push(GuardrailWarning::new(
            Field::Keywords.name(),
            Severity::Warn,
            "has spaces around commas (wastes chars)",
        ));
    }
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for w in keywords.split(',') {
        *counts.entry(w).or_default() += 1;
    }
    let dupes: BTreeSet<&str> = counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(w, _)| w)
        .collect();
    if !dupes.is_empty() {
        let listed: Vec<String> = dupes.iter().map(|w| format!("\"{}\"", w)).collect();
        out.push(GuardrailWarning::new(
            Field::Keywords.name(),
            Severity::Warn,
            format!("duplicates: {{{}}}", listed.join(", ")),
        ));
    }
    out
}

/// All findings for a record, generated or hand-authored. Pure.
pub fn validate(record: &MetadataRecord) -> Vec<GuardrailWarning> {
    let mut warnings: Vec<GuardrailWarning> = Field::TEXT
        .iter()
        .filter_map(|f| record.get(*f).map(|t| scan_text(*f, t)))
        .flatten()
        .collect();
    warnings.extend(check_limits(record));
    if let Some(kw) = record.get(Field::Keywords).filter(|k| !k.is_empty()) {
        warnings.extend(check_keywords(kw));
    }
    warnings
}

/// Upload gate.
///
/// Any BLOCK denies. WARN-only findings deny unless `force` is set; a forced
/// pass is marked `overridden` and keeps the bypassed warnings for audit.
pub fn enforce(record: &MetadataRecord, force: bool) -> Decision {
    let warnings = validate(record);
    let summary = Summary::of(&warnings);
    let (allowed, overridden) = if summary.blocks > 0 {
        (false, false)
    } else if summary.warnings == 0 {
        (true, false)
    } else {
        (force, force)
    };
    if overridden {
        warn!(count = warnings.len(), "guardrail warnings overridden with force");
    } else if !allowed {
        info!(blocks = summary.blocks, warnings = summary.warnings, "upload denied");
    }
    Decision {
        allowed,
        overridden,
        warnings,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::SUBSCRIPTION_TERMS;

    fn rec(field: Field, text: &str) -> MetadataRecord {
        MetadataRecord::default().with(field, text)
    }

    #[test]
    fn test_email_in_description_warns() {
        let w = validate(&rec(Field::Description, "Questions? Write to help@pulse.app today"));
        assert!(w
            .iter()
            .any(|x| x.field == "description" && x.message.contains("email address")));
        assert!(w.iter().all(|x| x.severity == Severity::Warn));
    }

    #[test]
    fn test_url_allow_list() {
        let w = validate(&rec(Field::Description, SUBSCRIPTION_TERMS));
        assert!(w.is_empty(), "{:?}", w);
        let w = validate(&rec(Field::PromotionalText, "See https://pulse.app/launch"));
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].message, "contains URL: \"https://pulse.app/launch\"");
    }

    #[test]
    fn test_phone_and_handle() {
        let w = validate(&rec(Field::WhatsNew, "Call +1 (555) 123-4567 or ping @pulseapp"));
        let labels: Vec<_> = w.iter().map(|x| x.message.as_str()).collect();
        assert!(labels.iter().any(|m| m.starts_with("contains phone number")));
        assert!(labels
            .iter()
            .any(|m| *m == "contains social media handle: \"@pulseapp\""));
        assert!(w.iter().all(|x| x.field == "whatsNew"));
    }

    #[test]
    fn test_short_digit_runs_are_not_phones() {
        assert!(validate(&rec(Field::Description, "Renews within 24 hours, 7 days free")).is_empty());
    }

    #[test]
    fn test_phone_needs_nine_characters() {
        assert!(validate(&rec(Field::Description, "Order 12345678 shipped")).is_empty());
        let w = validate(&rec(Field::Description, "Order 123456789 shipped"));
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].message, "contains phone number: \"123456789\"");
    }

    #[test]
    fn test_subtitle_length_boundary() {
        let ok = validate(&rec(Field::Subtitle, &"a".repeat(30)));
        assert!(ok.iter().all(|w| w.severity != Severity::Block));
        let bad = validate(&rec(Field::Subtitle, &"a".repeat(31)));
        let blocks: Vec<_> = bad.iter().filter(|w| w.is_block()).collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].field, "subtitle");
        assert_eq!(blocks[0].message, "exceeds 30 char limit (31 chars)");
    }

    #[test]
    fn test_limits_count_chars_not_bytes() {
        let w = validate(&rec(Field::Subtitle, &"é".repeat(30)));
        assert!(w.is_empty());
    }

    #[test]
    fn test_duplicate_keywords() {
        let w = validate(&rec(Field::Keywords, "fit,fit,health"));
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].severity, Severity::Warn);
        assert_eq!(w[0].message, "duplicates: {\"fit\"}");
    }

    #[test]
    fn test_comma_whitespace() {
        let w = validate(&rec(Field::Keywords, "fit, health ,sleep"));
        assert!(w.iter().any(|x| x.message.contains("spaces around commas")));
    }

    #[test]
    fn test_enforce_block_is_never_overridden() {
        let r = rec(Field::Subtitle, &"x".repeat(40)).with(Field::Description, "mail a@b.co");
        let d = enforce(&r, true);
        assert!(!d.allowed);
        assert!(!d.overridden);
        assert_eq!(d.summary.blocks, 1);
    }

    #[test]
    fn test_enforce_warn_requires_force() {
        let r = rec(Field::Keywords, "fit,fit,health");
        let d = enforce(&r, false);
        assert!(!d.allowed);
        let d = enforce(&r, true);
        assert!(d.allowed);
        assert!(d.overridden);
        assert!(!d.warnings.is_empty());
    }

    #[test]
    fn test_enforce_clean_record() {
        let r = rec(Field::Subtitle, "Move More, Feel Stronger").with(Field::Keywords, "fit,health");
        let d = enforce(&r, false);
        assert!(d.allowed);
        assert!(!d.overridden);
        assert!(d.warnings.is_empty());
    }
}
