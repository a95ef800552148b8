// Load -> normalize -> areas -> markers pipeline for a project file

use crate::config::{AreaConfig, ProjectConfig};
use crate::error::Result;
use crate::loader::{load_marker_records, load_named_areas, validate_area};
use crate::map::{LayerGroup, Map};
use crate::model::AreaStyle;
use crate::normalize::normalize_markers;
use crate::render::{add_areas, add_markers};
use serde_json::Value;
use tracing::{info, warn};

/// Options for building a map from a project
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Normalize every group's marker directory, regardless of the group setting
    pub normalize_all: bool,
    /// Reject areas that are not valid geoJSON
    pub strict_geojson: bool,
}

/// Counts from one build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub areas: usize,
    pub groups: usize,
    pub markers: usize,
    pub normalized_files: usize,
}

/// Build the map described by `config`
pub fn build_map(config: &ProjectConfig, options: &BuildOptions) -> Result<(Map, BuildSummary)> {
    let mut map = Map::new(config.map.clone());
    let mut summary = BuildSummary::default();

    for area_config in &config.areas {
        let (areas, names, styles) = collect_areas(area_config, options.strict_geojson)?;
        add_areas(&areas, &names, &styles, &mut map)?;
        summary.areas += areas.len();
    }

    for group_config in &config.groups {
        if options.normalize_all || group_config.normalize {
            let normalized = normalize_markers(&group_config.markers)?;
            summary.normalized_files += normalized.updated.len();
        }

        let records = load_marker_records(&group_config.markers)?;
        if records.is_empty() {
            warn!(
                "Group '{}' has no markers in {}",
                group_config.name,
                group_config.markers.display()
            );
        }

        let mut group = LayerGroup::new(&group_config.name);
        summary.markers += add_markers(&records, &mut group);
        map.add_group(group);
        summary.groups += 1;
    }

    info!(
        "Built map: {} area(s), {} group(s), {} marker(s)",
        summary.areas, summary.groups, summary.markers
    );
    Ok((map, summary))
}

/// Load one area directory into aligned shape, name and style lists
fn collect_areas(
    area_config: &AreaConfig,
    strict_geojson: bool,
) -> Result<(Vec<Value>, Vec<String>, Vec<AreaStyle>)> {
    let named = load_named_areas(&area_config.dir)?;
    let count = named.len();

    let mut areas = Vec::with_capacity(count);
    let mut names = Vec::with_capacity(count);
    for (stem, area) in named {
        if strict_geojson {
            validate_area(&area)?;
        }
        names.push(area_display_name(area_config.name.as_deref(), &stem, count));
        areas.push(area);
    }

    let styles = vec![area_config.style.clone(); count];
    Ok((areas, names, styles))
}

// A shared name is suffixed with the stem so layer-control entries stay distinct
fn area_display_name(name: Option<&str>, stem: &str, count: usize) -> String {
    match name {
        Some(name) if count == 1 => name.to_string(),
        Some(name) => format!("{}: {}", name, stem),
        None => stem.to_string(),
    }
}
