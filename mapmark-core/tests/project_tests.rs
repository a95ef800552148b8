// Tests for building a map from a project file

use mapmark_core::MapError;
use mapmark_core::config::ProjectConfig;
use mapmark_core::project::{BuildOptions, build_map};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn create_project(root: &Path, normalize: bool) -> std::path::PathBuf {
    let markers = root.join("markers");
    let areas = root.join("areas");
    fs::create_dir_all(&markers).unwrap();
    fs::create_dir_all(&areas).unwrap();

    fs::write(
        markers.join("bled.json"),
        r#"{"name_id":"bled","loc":[46.369,14.114],"name_code":"Bled"}"#,
    )
    .unwrap();
    fs::write(
        markers.join("predjama.json"),
        r#"{"name_id":"predjama","loc":[45.815,14.127],"name_code":"Predjama","site_link":"https://predjama.example.com","text":"Cave castle"}"#,
    )
    .unwrap();
    fs::write(
        areas.join("north.geojson"),
        r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[14.0,46.0]},"properties":{}}"#,
    )
    .unwrap();
    fs::write(
        areas.join("south.geojson"),
        r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[14.0,45.5]},"properties":{}}"#,
    )
    .unwrap();

    let config_path = root.join("project.toml");
    fs::write(
        &config_path,
        format!(
            r##"
[map]
center = [46.0, 14.5]
zoom = 8

[[groups]]
name = "Castles"
markers = "markers"
normalize = {normalize}

[[areas]]
name = "Forests"
dir = "areas"
style = {{ fillColor = "#228B22", color = "#006400", opacity = 0.6 }}
"##
        ),
    )
    .unwrap();
    config_path
}

// ============================================================================
// Config Loading Tests
// ============================================================================

#[test]
fn test_config_paths_resolve_against_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_project(temp_dir.path(), false);

    let config = ProjectConfig::from_toml_file(&config_path).unwrap();

    assert_eq!(config.groups[0].markers, temp_dir.path().join("markers"));
    assert_eq!(config.areas[0].dir, temp_dir.path().join("areas"));
}

#[test]
fn test_config_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = ProjectConfig::from_toml_file(&temp_dir.path().join("missing.toml"));
    assert!(matches!(result, Err(MapError::Io { .. })));
}

// ============================================================================
// Build Tests
// ============================================================================

#[test]
fn test_build_map_from_project() {
    let temp_dir = TempDir::new().unwrap();
    let config = ProjectConfig::from_toml_file(&create_project(temp_dir.path(), false)).unwrap();

    let (map, summary) = build_map(&config, &BuildOptions::default()).unwrap();

    assert_eq!(summary.areas, 2);
    assert_eq!(summary.groups, 1);
    assert_eq!(summary.markers, 2);
    assert_eq!(summary.normalized_files, 0);

    let names: Vec<&str> = map.overlays().iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Forests: north", "Forests: south"]);
    assert_eq!(map.groups()[0].name(), "Castles");
    assert_eq!(map.options().zoom, 8);

    let predjama = &map.groups()[0].markers()[1];
    assert!(predjama.popup.contains("Cave castle"));
}

#[test]
fn test_build_map_normalizes_when_asked() {
    let temp_dir = TempDir::new().unwrap();
    let config = ProjectConfig::from_toml_file(&create_project(temp_dir.path(), true)).unwrap();

    let (_, summary) = build_map(&config, &BuildOptions::default()).unwrap();
    assert_eq!(summary.normalized_files, 2);

    let content = fs::read_to_string(temp_dir.path().join("markers/bled.json")).unwrap();
    assert!(content.contains("\"marker_icon_prefix\""));

    let (_, summary) = build_map(&config, &BuildOptions::default()).unwrap();
    assert_eq!(summary.normalized_files, 0);
}

#[test]
fn test_build_map_strict_geojson_rejects_invalid_area() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_project(temp_dir.path(), false);
    fs::write(
        temp_dir.path().join("areas/broken.geojson"),
        r#"{"type":"Bogus"}"#,
    )
    .unwrap();
    let config = ProjectConfig::from_toml_file(&config_path).unwrap();

    let lenient = build_map(&config, &BuildOptions::default());
    assert!(lenient.is_ok());

    let strict = build_map(
        &config,
        &BuildOptions {
            strict_geojson: true,
            ..BuildOptions::default()
        },
    );
    assert!(matches!(strict, Err(MapError::InvalidGeoJson(_))));
}

#[test]
fn test_build_map_missing_marker_directory() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_project(temp_dir.path(), false);
    fs::remove_dir_all(temp_dir.path().join("markers")).unwrap();
    let config = ProjectConfig::from_toml_file(&config_path).unwrap();

    let result = build_map(&config, &BuildOptions::default());
    assert!(matches!(result, Err(MapError::DirectoryNotFound(_))));
}
