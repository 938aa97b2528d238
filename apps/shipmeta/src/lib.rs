//! Shipmeta core library.
//!
//! This crate generates and validates App Store listing metadata from an
//! app's source tree. The engine is deterministic and takes every input as
//! an explicit parameter; the store itself sits behind the `Publisher`
//! trait.
//!
//! High-level modules:
//! - `analyze`: Lexical project analysis (screens, models, tabs, imports).
//! - `classify`: Category inference from integrations and signal density.
//! - `keywords`: Tokenizing, singularizing and keyword field synthesis.
//! - `generate`: Subtitle, description and promotional copy; record assembly.
//! - `guardrail`: Content and length validation and the upload gate.
//! - `pipeline`: Analysis-to-record orchestration and before/after comparison.
//! - `artifact`: Review artifact path, write and read.
//! - `publish`: Store collaborator trait and gated upload.
//! - `store`: Directory-backed store.
//! - `tables`: Static integration, category and word tables.
//! - `fit`: First-fit scans over ordered candidates.
//! - `models`: Data models for analysis, records and guardrail findings.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `output`: Human/JSON printers.
//! - `error`: Crate error type.
//! - `utils`: Supporting helpers.
pub mod analyze;
pub mod artifact;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod fit;
pub mod generate;
pub mod guardrail;
pub mod keywords;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod publish;
pub mod store;
pub mod tables;
pub mod utils;
