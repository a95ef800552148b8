// Directory loaders for marker and area files

use crate::error::{MapError, Result};
use crate::model::MarkerRecord;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Key for a data file: the file name up to its first `.`
pub fn file_key(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .map(|name| name.split('.').next().unwrap_or_default().to_string())
        .unwrap_or_default()
}

/// List the regular files directly inside `dir`, sorted by file name.
///
/// Subdirectories are skipped. The directory itself must exist.
pub fn list_data_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(MapError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| MapError::io(dir, e))? {
        let path = entry.map_err(|e| MapError::io(dir, e))?.path();
        if path.is_file() {
            files.push(path);
        } else {
            debug!("Skipping non-file entry {}", path.display());
        }
    }

    files.sort();
    Ok(files)
}

/// Read and parse a single JSON file
pub fn read_json_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| MapError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| MapError::json(path, e))
}

/// Load every marker file in `dir`, keyed by file stem
pub fn load_markers(dir: &Path) -> Result<BTreeMap<String, Value>> {
    let mut result = BTreeMap::new();

    for path in list_data_files(dir)? {
        debug!("Loading marker file {}", path.display());
        let data = read_json_file(&path)?;
        result.insert(file_key(&path), data);
    }

    info!("Loaded {} marker file(s) from {}", result.len(), dir.display());
    Ok(result)
}

/// Load every marker file in `dir` and parse it into a `MarkerRecord`
pub fn load_marker_records(dir: &Path) -> Result<BTreeMap<String, MarkerRecord>> {
    load_markers(dir)?
        .into_iter()
        .map(|(key, value)| -> Result<(String, MarkerRecord)> {
            let record = MarkerRecord::from_value(&key, value)?;
            Ok((key, record))
        })
        .collect()
}

/// Load every geoJSON file in `dir`
pub fn load_areas(dir: &Path) -> Result<Vec<Value>> {
    Ok(load_named_areas(dir)?
        .into_iter()
        .map(|(_, area)| area)
        .collect())
}

/// Load every geoJSON file in `dir`, keeping the file stem next to each shape
pub fn load_named_areas(dir: &Path) -> Result<Vec<(String, Value)>> {
    let mut result = Vec::new();

    for path in list_data_files(dir)? {
        debug!("Loading area file {}", path.display());
        let data = read_json_file(&path)?;
        result.push((file_key(&path), data));
    }

    info!("Loaded {} area file(s) from {}", result.len(), dir.display());
    Ok(result)
}

/// Check that an area value is well-formed geoJSON
pub fn validate_area(area: &Value) -> Result<()> {
    geojson::GeoJson::from_json_value(area.clone())
        .map(|_| ())
        .map_err(|e| MapError::InvalidGeoJson(e.to_string()))
}
