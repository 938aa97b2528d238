//! Review artifact: the generated record written as pretty JSON next to the
//! project, and record files read back for `validate`/`set`.

use crate::error::{Error, Result};
use crate::models::MetadataRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Lowercase `name`, replacing every non-alphanumeric char with `_`.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                '_'
            }
        })
        .collect()
}

/// `<out_dir>/<sanitized_name>_metadata.json`
pub fn artifact_path(out_dir: &Path, app_name: &str) -> PathBuf {
    out_dir.join(format!("{}_metadata.json", sanitize_name(app_name)))
}

/// Write `record` to `path`, replacing any previous content.
pub fn write_record(path: &Path, record: &MetadataRecord) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let mut body = serde_json::to_string_pretty(record).map_err(|e| Error::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    body.push('\n');
    fs::write(path, body).map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), "wrote metadata artifact");
    Ok(())
}

/// Read a record file. Unknown keys are ignored; missing keys stay absent.
pub fn load_record(path: &Path) -> Result<MetadataRecord> {
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| Error::Json {
        path: path.to_path_buf(),
        source: e,
    })
}
