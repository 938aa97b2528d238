//! Output rendering for analysis, records, guardrail reports and
//! comparisons.
//!
//! Supports `human` (default) and `json` outputs. Results go to stdout;
//! diagnostics go through `tracing` on stderr.

use crate::generate::Generated;
use crate::models::{Decision, Field, MetadataRecord, ProjectAnalysis, Severity};
use crate::pipeline::FieldChange;
use crate::utils::display_path;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::path::Path;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn print_json(v: &JsonVal) {
    println!("{}", serde_json::to_string_pretty(v).unwrap_or_default());
}

fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn list(set: &std::collections::BTreeSet<String>) -> String {
    if set.is_empty() {
        "-".to_string()
    } else {
        set.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Print a project analysis.
pub fn print_analysis(a: &ProjectAnalysis, output: &str) {
    match output {
        "json" => print_json(&compose_analysis_json(a)),
        _ => {
            let color = use_colors(output);
            let cats: Vec<String> = a.category_hints.iter().map(|c| c.to_string()).collect();
            println!("{} {}", heading("Features:", color), list(&a.features));
            println!("{} {}", heading("Tabs:", color), list(&a.tab_names));
            println!("{} {}", heading("Views:", color), list(&a.view_names));
            println!("{} {}", heading("Models:", color), list(&a.model_names));
            println!("{} {}", heading("Integrations:", color), list(&a.integrations));
            println!(
                "{} {}",
                heading("Subscription:", color),
                if a.has_subscription { "yes" } else { "no" }
            );
            println!(
                "{} {}",
                heading("Categories:", color),
                if cats.is_empty() {
                    format!("- (fallback {})", a.primary_category())
                } else {
                    cats.join(", ")
                }
            );
        }
    }
}

/// Print a metadata record, one field per block.
pub fn print_record(rec: &MetadataRecord, output: &str) {
    match output {
        "json" => print_json(&compose_record_json(rec)),
        _ => {
            let color = use_colors(output);
            for f in Field::ALL {
                if let Some(v) = rec.get(f) {
                    let label = format!("{} ({} chars)", f.name(), v.chars().count());
                    println!("{}\n{}\n", heading(&label, color), v);
                }
            }
        }
    }
}

/// Print guardrail findings followed by the gate outcome.
pub fn print_decision(d: &Decision, output: &str) {
    match output {
        "json" => print_json(&compose_decision_json(d)),
        _ => {
            let color = use_colors(output);
            for w in &d.warnings {
                let icon = match w.severity {
                    Severity::Block if color => "✖".red().to_string(),
                    Severity::Block => "✖".to_string(),
                    Severity::Warn if color => "▲".yellow().to_string(),
                    Severity::Warn => "▲".to_string(),
                };
                println!("{} [{}] {}", icon, w.field, w.message);
            }
            let outcome = if d.allowed && d.overridden {
                "allowed (warnings overridden)"
            } else if d.allowed {
                "allowed"
            } else if d.summary.blocks > 0 {
                "denied (blocking findings)"
            } else {
                "denied (warnings need --force)"
            };
            let summary = format!(
                "— Guardrails — blocks={} warnings={} {}",
                d.summary.blocks, d.summary.warnings, outcome
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print a before/after comparison; unchanged fields are listed by name only.
pub fn print_comparison(changes: &[FieldChange], output: &str) {
    match output {
        "json" => print_json(&compose_comparison_json(changes)),
        _ => {
            let color = use_colors(output);
            for c in changes {
                if !c.changed {
                    if color {
                        println!("{} {}", "unchanged:".bright_black(), c.field);
                    } else {
                        println!("unchanged: {}", c.field);
                    }
                    continue;
                }
                println!("{}", heading(&format!("~ {}", c.field), color));
                let before = c.before.as_deref().unwrap_or("(none)");
                let after = c.after.as_deref().unwrap_or("(none)");
                if color {
                    println!("  {} {}", "-".red(), before);
                    println!("  {} {}", "+".green(), after);
                } else {
                    println!("  - {}", before);
                    println!("  + {}", after);
                }
            }
        }
    }
}

/// Report an artifact write in human mode, relative to the current dir.
pub fn print_artifact(path: &Path, degraded: bool, output: &str) {
    if output == "json" {
        return;
    }
    let color = use_colors(output);
    let shown = match std::env::current_dir() {
        Ok(cwd) => display_path(path, &cwd),
        Err(_) => path.to_string_lossy().to_string(),
    };
    if color {
        println!("{} {}", "📄 wrote:".green().bold(), shown);
    } else {
        println!("📄 wrote: {}", shown);
    }
    if degraded {
        println!("subtitle: no candidate met all constraints; fallback used");
    }
}

/// Print a `generate` run: record, artifact location and guardrail report.
/// JSON mode emits one combined document.
pub fn print_generated(gen: &Generated, artifact: &Path, decision: &Decision, output: &str) {
    match output {
        "json" => print_json(&json!({
            "record": compose_record_json(&gen.record),
            "artifact": artifact.to_string_lossy(),
            "subtitleDegraded": gen.subtitle_degraded,
            "guardrails": compose_decision_json(decision),
        })),
        _ => {
            print_record(&gen.record, output);
            print_artifact(artifact, gen.subtitle_degraded, output);
            print_decision(decision, output);
        }
    }
}

/// Print an `aso` run: comparison against the store, guardrail report, and
/// whether the record was uploaded.
pub fn print_aso(
    app_name: &str,
    changes: &[FieldChange],
    decision: &Decision,
    applied: bool,
    output: &str,
) {
    match output {
        "json" => print_json(&json!({
            "name": app_name,
            "comparison": compose_comparison_json(changes),
            "guardrails": compose_decision_json(decision),
            "applied": applied,
        })),
        _ => {
            let color = use_colors(output);
            println!("{} {}", heading("App:", color), app_name);
            print_comparison(changes, output);
            print_decision(decision, output);
            if applied {
                if color {
                    println!("{}", "📤 uploaded".green().bold());
                } else {
                    println!("📤 uploaded");
                }
            } else if decision.summary.blocks == 0 {
                println!("dry run: pass --apply to upload");
            }
        }
    }
}

/// Compose analysis JSON (pure).
pub fn compose_analysis_json(a: &ProjectAnalysis) -> JsonVal {
    serde_json::to_value(a).unwrap_or(JsonVal::Null)
}

/// Compose record JSON (pure). Absent fields are omitted.
pub fn compose_record_json(rec: &MetadataRecord) -> JsonVal {
    serde_json::to_value(rec).unwrap_or(JsonVal::Null)
}

/// Compose the gate report: `{allowed, overridden, warnings[]}`.
pub fn compose_decision_json(d: &Decision) -> JsonVal {
    json!({
        "allowed": d.allowed,
        "overridden": d.overridden,
        "warnings": d.warnings,
    })
}

/// Compose comparison JSON with a changed-count summary.
pub fn compose_comparison_json(changes: &[FieldChange]) -> JsonVal {
    json!({
        "fields": changes,
        "summary": {
            "changed": changes.iter().filter(|c| c.changed).count(),
            "total": changes.len(),
        }
    })
}
