//! Lexical project analyzer.
//!
//! Scans a source tree for textual signals (type declarations with view or
//! model conformances, tab items, navigation titles and labels, imported
//! frameworks) and condenses them into a `ProjectAnalysis`.
//!
//! The scan never fails: a missing root yields an empty analysis, and files
//! that cannot be read or decoded as UTF-8 are skipped and contribute nothing
//! to the aggregate text.

use crate::classify::classify;
use crate::models::ProjectAnalysis;
use crate::tables::{FEATURE_CAP, INTEGRATIONS, README_EXCERPT_CAP};
use crate::utils::truncate_chars;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directories holding build output or vendored code.
const SKIP_DIRS: &[&str] = &[
    ".build",
    ".git",
    "build",
    "DerivedData",
    "Pods",
    "Carthage",
    "node_modules",
];

const README_NAMES: &[&str] = &["README.md", "Readme.md", "readme.md", "README"];

static VIEW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:struct|class)\s+([A-Za-z_]\w*)\s*:[^{\n]*?\bView\b").unwrap()
});
static MODEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:struct|class)\s+([A-Za-z_]\w*)\s*:[^{\n]*?\b(?:Codable|Identifiable|ObservableObject)\b",
    )
    .unwrap()
});
static OBSERVABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@Observable\s+(?:final\s+)?class\s+([A-Za-z_]\w*)").unwrap());
static TAB_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\.tabItem\s*\{[^}]*?Label\(\s*"([^"]+)""#).unwrap());
static TAB_TEXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\.tabItem\s*\{[^}]*?Text\(\s*"([^"]+)""#).unwrap());
static FEATURE_RES: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        Regex::new(r#"\.navigationTitle\(\s*"([^"]+)""#).unwrap(),
        Regex::new(r#"\.navigationBarTitle\(\s*"([^"]+)""#).unwrap(),
        Regex::new(r#"\bLabel\(\s*"([^"]+)""#).unwrap(),
        Regex::new(r#"\bSection\(\s*"([^"]+)""#).unwrap(),
    ]
});
static IMPORT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*import\s+(\w+)").unwrap());

/// A decoded source file.
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

/// Analyze the project rooted at `root`, reading files with the given
/// extensions (without leading dot).
pub fn analyze_project<S: AsRef<str>>(root: &Path, extensions: &[S]) -> ProjectAnalysis {
    if !root.is_dir() {
        warn!(root = %root.display(), "project root not found; using empty analysis");
        return ProjectAnalysis::default();
    }
    let sources = scan_sources(root, extensions);
    let mut analysis = analyze_sources(&sources);
    analysis.readme_excerpt = readme_excerpt(root);
    analysis
}

/// Enumerate and decode source files under `root`, sorted by path.
pub fn scan_sources<S: AsRef<str>>(root: &Path, extensions: &[S]) -> Vec<SourceFile> {
    let base = glob::Pattern::escape(&root.to_string_lossy());
    let mut paths: Vec<PathBuf> = Vec::new();
    for ext in extensions {
        let pattern = format!("{}/**/*.{}", base, ext.as_ref().trim_start_matches('.'));
        let entries = match glob::glob(&pattern) {
            Ok(e) => e,
            Err(e) => {
                warn!(pattern = %pattern, error = %e, "bad source pattern");
                continue;
            }
        };
        paths.extend(
            entries
                .flatten()
                .filter(|p| p.is_file() && !in_skipped_dir(root, p)),
        );
    }
    paths.sort();
    paths.dedup();

    paths
        .into_iter()
        .filter_map(|path| match read_text(&path) {
            Some(text) => Some(SourceFile { path, text }),
            None => {
                debug!(file = %path.display(), "skipping unreadable or binary file");
                None
            }
        })
        .collect()
}

fn in_skipped_dir(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .any(|c| SKIP_DIRS.iter().any(|d| c.as_os_str() == *d))
}

fn read_text(path: &Path) -> Option<String> {
    let bytes = fs::read(path).ok()?;
    if bytes.contains(&0) {
        return None;
    }
    String::from_utf8(bytes).ok()
}

/// Derive the analysis from already-decoded sources (README excerpt not
/// included).
pub fn analyze_sources(sources: &[SourceFile]) -> ProjectAnalysis {
    let mut view_names = BTreeSet::new();
    let mut model_names = BTreeSet::new();
    let mut tab_names = BTreeSet::new();
    let mut features = BTreeSet::new();
    let mut imports = BTreeSet::new();

    for src in sources {
        let text = src.text.as_str();
        view_names.extend(captures(&VIEW_RE, text));
        model_names.extend(captures(&MODEL_RE, text));
        model_names.extend(captures(&OBSERVABLE_RE, text));
        tab_names.extend(captures(&TAB_LABEL_RE, text).filter_map(clean_literal));
        tab_names.extend(captures(&TAB_TEXT_RE, text).filter_map(clean_literal));
        for re in FEATURE_RES.iter() {
            features.extend(captures(re, text).filter_map(clean_literal));
        }
        imports.extend(captures(&IMPORT_RE, text));
    }

    let aggregate: String = sources
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let integrations = detect_integrations(&aggregate, &imports);
    let has_subscription = INTEGRATIONS
        .iter()
        .any(|i| i.payment && integrations.contains(i.name));
    let category_hints = classify(&integrations, &aggregate);
    debug!(
        files = sources.len(),
        integrations = ?integrations,
        hints = ?category_hints,
        "analysis complete"
    );

    ProjectAnalysis {
        features: features.into_iter().take(FEATURE_CAP).collect(),
        integrations,
        view_names,
        model_names,
        tab_names,
        has_subscription,
        category_hints,
        readme_excerpt: String::new(),
    }
}

/// Frameworks from the integration table named anywhere in the text
/// (case-insensitive) or imported explicitly.
pub fn detect_integrations(text: &str, imports: &BTreeSet<String>) -> BTreeSet<String> {
    let lower = text.to_lowercase();
    INTEGRATIONS
        .iter()
        .filter(|i| imports.contains(i.name) || lower.contains(&i.name.to_lowercase()))
        .map(|i| i.name.to_string())
        .collect()
}

fn captures<'t>(re: &'t Regex, text: &'t str) -> impl Iterator<Item = String> + 't {
    re.captures_iter(text)
        .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
}

/// Drop interpolated or blank literals; trim the rest.
fn clean_literal(s: String) -> Option<String> {
    let t = s.trim();
    if t.is_empty() || t.contains('\\') {
        None
    } else {
        Some(t.to_string())
    }
}

fn readme_excerpt(root: &Path) -> String {
    README_NAMES
        .iter()
        .map(|n| root.join(n))
        .find(|p| p.is_file())
        .and_then(|p| read_text(&p))
        .map(|s| truncate_chars(s.trim(), README_EXCERPT_CAP).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::tempdir;

    const HOME_VIEW: &str = r#"
import SwiftUI
import HealthKit

struct HomeView: View {
    var body: some View {
        TabView {
            WorkoutListView()
                .tabItem { Label("Workouts", systemImage: "figure.run") }
            HistoryView()
                .tabItem {
                    Text("History")
                }
        }
        .navigationTitle("Today")
    }
}
"#;

    const MODELS: &str = r#"
import Foundation
import StoreKit

struct Workout: Codable, Identifiable {
    let id: UUID
    var calories: Int
}

final class SessionStore: ObservableObject {}

@Observable
class TrainingPlan {}

struct SettingsScreen: View {
    var body: some View {
        Form {
            Section("Reminders") { Label("Daily goal", systemImage: "target") }
            Text("\(count) sessions")
        }
        .navigationBarTitle("Settings")
    }
}
"#;

    fn write(dir: &Path, rel: &str, content: &[u8]) {
        let p = dir.join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(p, content).unwrap();
    }

    #[test]
    fn test_missing_root_gives_empty_analysis() {
        let dir = tempdir().unwrap();
        let a = analyze_project(&dir.path().join("nope"), &["swift"]);
        assert!(a.is_empty());
        assert!(!a.has_subscription);
    }

    #[test]
    fn test_full_scan_of_fixture_project() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "App/HomeView.swift", HOME_VIEW.as_bytes());
        write(root, "App/Models/Models.swift", MODELS.as_bytes());
        write(root, "README.md", b"# Pulse\nA workout tracker.");

        let a = analyze_project(root, &["swift"]);
        assert!(a.view_names.contains("HomeView"));
        assert!(a.view_names.contains("SettingsScreen"));
        assert!(a.model_names.contains("Workout"));
        assert!(a.model_names.contains("SessionStore"));
        assert!(a.model_names.contains("TrainingPlan"));
        assert_eq!(
            a.tab_names.iter().cloned().collect::<Vec<_>>(),
            vec!["History".to_string(), "Workouts".to_string()]
        );
        for f in ["Today", "Settings", "Workouts", "Reminders", "Daily goal"] {
            assert!(a.features.contains(f), "missing feature {}", f);
        }
        assert!(!a.features.iter().any(|f| f.contains("sessions")));
        assert!(a.integrations.contains("HealthKit"));
        assert!(a.integrations.contains("StoreKit"));
        assert!(a.has_subscription);
        assert!(a.category_hints.contains(&Category::HealthFitness));
        assert!(a.readme_excerpt.starts_with("# Pulse"));
    }

    #[test]
    fn test_binary_and_invalid_utf8_files_are_skipped() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "a.swift", b"import MapKit\0\x01\x02");
        write(root, "b.swift", &[0xff, 0xfe, 0x69, 0x6d]);
        write(root, "c.swift", b"struct AView: View {}");
        let sources = scan_sources(root, &["swift"]);
        assert_eq!(sources.len(), 1);
        let a = analyze_project(root, &["swift"]);
        assert!(a.integrations.is_empty());
        assert!(a.view_names.contains("AView"));
    }

    #[test]
    fn test_build_dirs_and_other_extensions_ignored() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, ".build/checkouts/Dep.swift", b"import GameKit");
        write(root, "Notes.txt", b"import WeatherKit");
        let a = analyze_project(root, &["swift"]);
        assert!(a.integrations.is_empty());
    }

    #[test]
    fn test_integration_detected_by_mention() {
        let imports = BTreeSet::new();
        let found = detect_integrations("Purchases.configure(withAPIKey: revenuecatKey)", &imports);
        assert!(found.contains("RevenueCat"));
    }

    #[test]
    fn test_features_capped() {
        let text: String = (0..30)
            .map(|i| format!(".navigationTitle(\"Screen {:02}\")\n", i))
            .collect();
        let a = analyze_sources(&[SourceFile {
            path: PathBuf::from("x.swift"),
            text,
        }]);
        assert_eq!(a.features.len(), FEATURE_CAP);
    }
}
