//! Project configuration
//!
//! A project file is TOML. It names the map view, the marker directories
//! (one layer group each) and the area directories (one overlay per file,
//! sharing a display name and style).
//!
//! ```toml
//! [map]
//! center = [46.05, 14.5]
//! zoom = 7
//!
//! [[groups]]
//! name = "Castles"
//! markers = "markers/castles"
//!
//! [[areas]]
//! name = "Forests"
//! dir = "areas/forests"
//! style = { fillColor = "#228B22", color = "#006400", opacity = 0.6 }
//! ```

use crate::error::{MapError, Result};
use crate::map::MapOptions;
use crate::model::AreaStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One layer group of markers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConfig {
    pub name: String,

    /// Directory of marker files
    pub markers: PathBuf,

    /// Backfill missing marker attributes before rendering
    #[serde(default)]
    pub normalize: bool,
}

/// One directory of area files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaConfig {
    /// Display name. Defaults to each file's stem.
    #[serde(default)]
    pub name: Option<String>,

    /// Directory of geoJSON files
    pub dir: PathBuf,

    #[serde(default)]
    pub style: AreaStyle,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub map: MapOptions,

    #[serde(default)]
    pub groups: Vec<GroupConfig>,

    #[serde(default)]
    pub areas: Vec<AreaConfig>,
}

impl ProjectConfig {
    /// Load a project file. Relative paths inside it are resolved against
    /// the file's directory, and `~` is expanded.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| MapError::io(path, e))?;
        let mut config = Self::from_toml_str(&contents)?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.resolve_paths(base);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| MapError::Config(e.to_string()))
    }

    /// Rewrite every directory path relative to `base`
    pub fn resolve_paths(&mut self, base: &Path) {
        for group in &mut self.groups {
            group.markers = resolve_path(base, &group.markers);
        }
        for area in &mut self.areas {
            area.dir = resolve_path(base, &area.dir);
        }
    }
}

/// Expand `~` and join relative paths onto `base`
pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref());
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}
