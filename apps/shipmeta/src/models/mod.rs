//! Shared data models: project analysis, metadata records, guardrail output.

pub mod analysis;
pub mod category;
pub mod record;

pub use analysis::ProjectAnalysis;
pub use category::Category;
pub use record::{Field, MetadataRecord};

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
/// BLOCK must never be published; WARN may be overridden by the operator.
pub enum Severity {
    Warn,
    Block,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warn => "WARN",
            Severity::Block => "BLOCK",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A single guardrail finding tagged to a record field.
pub struct GuardrailWarning {
    pub field: String,
    pub severity: Severity,
    pub message: String,
}

impl GuardrailWarning {
    pub fn new(field: &str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            severity,
            message: message.into(),
        }
    }

    pub fn is_block(&self) -> bool {
        self.severity == Severity::Block
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub blocks: usize,
    pub warnings: usize,
}

impl Summary {
    pub fn of(warnings: &[GuardrailWarning]) -> Self {
        let blocks = warnings.iter().filter(|w| w.is_block()).count();
        Self {
            blocks,
            warnings: warnings.len() - blocks,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
/// Outcome of the upload gate. `overridden` records that WARN findings were
/// bypassed with an explicit force flag.
pub struct Decision {
    pub allowed: bool,
    pub overridden: bool,
    pub warnings: Vec<GuardrailWarning>,
    pub summary: Summary,
}
