//! Directory-backed store.
//!
//! Each app is one JSON document at `<root>/<app_id>.json`:
//!
//! ```json
//! { "name": "Pulse", "localizations": { "en-US": { "subtitle": "..." } } }
//! ```
//!
//! Pushes update only the fields present in the pushed record, matching the
//! store API's PATCH behaviour, and only for localizations that already
//! exist. Categories belong to the app, not to a localization: they live at
//! the top of the document and every locale reads the same pair.

use crate::error::{Error, Result};
use crate::models::MetadataRecord;
use crate::publish::Publisher;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppDocument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_category: Option<String>,
    #[serde(default)]
    pub localizations: BTreeMap<String, MetadataRecord>,
}

#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn doc_path(&self, app_id: &str) -> PathBuf {
        self.root.join(format!("{}.json", app_id))
    }

    pub fn load(&self, app_id: &str) -> Result<AppDocument> {
        let path = self.doc_path(app_id);
        if !path.exists() {
            return Err(Error::UnknownApp {
                app_id: app_id.to_string(),
            });
        }
        let text = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        serde_json::from_str(&text).map_err(|e| Error::Json { path, source: e })
    }

    /// Create or replace the document for `app_id`.
    pub fn save(&self, app_id: &str, doc: &AppDocument) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| Error::io(&self.root, e))?;
        let path = self.doc_path(app_id);
        let body = serde_json::to_string_pretty(doc).map_err(|e| Error::Json {
            path: path.clone(),
            source: e,
        })?;
        fs::write(&path, body).map_err(|e| Error::io(&path, e))
    }
}

impl Publisher for DirStore {
    fn fetch_metadata(&self, app_id: &str, locale: &str) -> Result<MetadataRecord> {
        let doc = self.load(app_id)?;
        let rec = doc
            .localizations
            .get(locale)
            .ok_or_else(|| Error::UnknownLocale {
                app_id: app_id.to_string(),
                locale: locale.to_string(),
            })?;
        Ok(MetadataRecord {
            locale: Some(locale.to_string()),
            primary_category: doc.primary_category.clone(),
            secondary_category: doc.secondary_category.clone(),
            ..rec.clone()
        })
    }

    fn fetch_app_name(&self, app_id: &str) -> Result<String> {
        Ok(self.load(app_id)?.name)
    }

    fn push_metadata(&mut self, app_id: &str, record: &MetadataRecord) -> Result<()> {
        let mut doc = self.load(app_id)?;
        let locale = record.locale_or_default().to_string();
        let current = doc
            .localizations
            .get(&locale)
            .ok_or_else(|| Error::UnknownLocale {
                app_id: app_id.to_string(),
                locale: locale.clone(),
            })?;
        let merged = MetadataRecord {
            locale: None,
            primary_category: None,
            secondary_category: None,
            ..record.overlay(current)
        };
        doc.localizations.insert(locale.clone(), merged);
        if record.primary_category.is_some() {
            doc.primary_category = record.primary_category.clone();
        }
        if record.secondary_category.is_some() {
            doc.secondary_category = record.secondary_category.clone();
        }
        self.save(app_id, &doc)?;
        debug!(app_id, locale = %locale, "localization updated");
        Ok(())
    }
}
