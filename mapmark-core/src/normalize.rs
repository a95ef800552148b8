// In-place backfill of missing marker attributes

use crate::error::{MapError, Result};
use crate::loader::{list_data_files, read_json_file};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Attributes every marker file should carry after normalization
pub const REQUIRED_MARKER_KEYS: [&str; 8] = [
    "name_id",
    "img_url",
    "wiki_link",
    "site_link",
    "text",
    "marker_color",
    "marker_icon",
    "marker_icon_prefix",
];

/// Outcome of a normalization pass over one directory
#[derive(Debug, Clone, Default)]
pub struct NormalizeSummary {
    pub scanned: usize,
    pub updated: Vec<PathBuf>,
}

impl NormalizeSummary {
    pub fn unchanged(&self) -> usize {
        self.scanned - self.updated.len()
    }
}

/// Insert an empty string for every required key the record lacks.
///
/// Returns the keys that were added. Existing keys are never touched.
pub fn normalize_value(value: &mut Value) -> Option<Vec<&'static str>> {
    let object = value.as_object_mut()?;
    let mut added = Vec::new();

    for key in REQUIRED_MARKER_KEYS {
        if !object.contains_key(key) {
            object.insert(key.to_string(), Value::String(String::new()));
            added.push(key);
        }
    }

    Some(added)
}

/// Normalize every marker file in `dir`, rewriting only the files that changed
pub fn normalize_markers(dir: &Path) -> Result<NormalizeSummary> {
    let mut summary = NormalizeSummary::default();

    for path in list_data_files(dir)? {
        summary.scanned += 1;
        let mut data = read_json_file(&path)?;

        let added =
            normalize_value(&mut data).ok_or_else(|| MapError::NotAnObject(path.clone()))?;
        if added.is_empty() {
            continue;
        }

        debug!("Backfilling {:?} in {}", added, path.display());
        write_json_file(&path, &data)?;
        summary.updated.push(path);
    }

    info!(
        "Normalized {} marker file(s) in {} ({} updated)",
        summary.scanned,
        dir.display(),
        summary.updated.len()
    );
    Ok(summary)
}

fn write_json_file(path: &Path, data: &Value) -> Result<()> {
    let mut content = serde_json::to_string_pretty(data)?;
    content.push('\n');
    fs::write(path, content).map_err(|e| MapError::io(path, e))
}
