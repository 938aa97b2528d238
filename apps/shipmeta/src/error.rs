//! Error type shared by the library and the binary.
//!
//! The analyzer and the generator never fail; errors come from reading or
//! writing records, from the guardrail gate, and from the store collaborator.

use crate::models::GuardrailWarning;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed metadata record in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// At least one BLOCK warning; never overridable.
    #[error("blocked by guardrails: {}", fields.join(", "))]
    GuardrailBlocked {
        fields: Vec<String>,
        warnings: Vec<GuardrailWarning>,
    },

    /// Only WARN findings, and the caller did not confirm.
    #[error("guardrail warnings require --force ({} found)", warnings.len())]
    GuardrailUnconfirmed { warnings: Vec<GuardrailWarning> },

    /// Error body returned by the store, surfaced verbatim.
    #[error("{detail}")]
    Store { detail: String },

    #[error("unknown app: {app_id}")]
    UnknownApp { app_id: String },

    #[error("no {locale} localization found for app {app_id}")]
    UnknownLocale { app_id: String, locale: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Input and configuration problems exit with 2, gate denials with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::GuardrailBlocked { .. } | Error::GuardrailUnconfirmed { .. } => 1,
            _ => 2,
        }
    }
}
