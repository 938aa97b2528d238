//! Analyzer → classifier → generator orchestration.

use crate::analyze::analyze_project;
use crate::artifact::{artifact_path, write_record};
use crate::error::Result;
use crate::generate::{generate_record, Generated};
use crate::guardrail::enforce;
use crate::models::{Decision, Field, MetadataRecord, ProjectAnalysis};
use crate::publish::{publish_decided, Publisher};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of one full run over a project tree.
#[derive(Debug, Clone)]
pub struct Run {
    pub analysis: ProjectAnalysis,
    pub generated: Generated,
}

/// One row of a before/after comparison.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: &'static str,
    pub before: Option<String>,
    pub after: Option<String>,
    pub changed: bool,
}

/// Analyze `root` and generate a candidate record for `app_name`.
///
/// Every input is explicit; the same tree and name always give the same
/// record.
pub fn run<S: AsRef<str>>(root: &Path, app_name: &str, locale: &str, extensions: &[S]) -> Run {
    let analysis = analyze_project(root, extensions);
    debug!(
        features = analysis.features.len(),
        integrations = analysis.integrations.len(),
        "analysis complete"
    );
    let generated = generate_record(&analysis, app_name, locale);
    Run {
        analysis,
        generated,
    }
}

/// Per-field comparison over all record fields, in display order.
pub fn compare(before: &MetadataRecord, after: &MetadataRecord) -> Vec<FieldChange> {
    Field::ALL
        .iter()
        .map(|f| {
            let b = before.get(*f).map(str::to_string);
            let a = after.get(*f).map(str::to_string);
            FieldChange {
                field: f.name(),
                changed: b != a,
                before: b,
                after: a,
            }
        })
        .collect()
}

/// A candidate record checked against the store's current one.
#[derive(Debug, Clone)]
pub struct Submission {
    pub record: MetadataRecord,
    pub changes: Vec<FieldChange>,
    pub decision: Decision,
    /// The record was pushed to the store.
    pub applied: bool,
}

/// Outcome of `aso`.
#[derive(Debug, Clone)]
pub struct AsoReport {
    pub app_name: String,
    pub artifact: PathBuf,
    pub subtitle_degraded: bool,
    pub submission: Submission,
}

/// Compare `record` with the store's copy for its locale and, when `apply`
/// is set, upload it with WARN findings overridden.
///
/// BLOCK findings are never overridden: the report comes back with
/// `applied == false` and the store untouched. Without `apply` nothing is
/// pushed.
pub fn submit<P: Publisher + ?Sized>(
    publisher: &mut P,
    app_id: &str,
    record: MetadataRecord,
    apply: bool,
) -> Result<Submission> {
    let current = publisher.fetch_metadata(app_id, record.locale_or_default())?;
    let changes = compare(&current, &record);
    let decision = enforce(&record, apply);
    let applied = apply && decision.allowed;
    if applied {
        publish_decided(publisher, app_id, &record, decision.clone())?;
    }
    Ok(Submission {
        record,
        changes,
        decision,
        applied,
    })
}

/// Generate metadata for `project` under the app's store name, write the
/// review artifact to `out_dir`, and submit it.
pub fn aso<P: Publisher + ?Sized, S: AsRef<str>>(
    publisher: &mut P,
    app_id: &str,
    project: &Path,
    locale: &str,
    extensions: &[S],
    out_dir: &Path,
    apply: bool,
) -> Result<AsoReport> {
    let app_name = publisher.fetch_app_name(app_id)?;
    let outcome = run(project, &app_name, locale, extensions);
    let artifact = artifact_path(out_dir, &app_name);
    write_record(&artifact, &outcome.generated.record)?;
    let submission = submit(publisher, app_id, outcome.generated.record, apply)?;
    Ok(AsoReport {
        app_name,
        artifact,
        subtitle_degraded: outcome.generated.subtitle_degraded,
        submission,
    })
}

/// Fields an upload of `after` would actually change.
pub fn changed_fields(changes: &[FieldChange]) -> Vec<&'static str> {
    changes.iter().filter(|c| c.changed).map(|c| c.field).collect()
}
