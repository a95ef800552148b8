// Tests for directory loading

use mapmark_core::loader::{list_data_files, load_areas, load_marker_records, load_markers, load_named_areas};
use mapmark_core::{MapError, StyleOverride};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn marker_json(name_id: &str) -> String {
    format!(
        r#"{{"name_id":"{name_id}","loc":[1.0,2.0],"name_code":"{name_id}","img_url":"u","wiki_link":"None","site_link":"","text":"","marker_color":"blue","marker_icon":"info-sign","marker_icon_prefix":"glyphicon"}}"#
    )
}

// ============================================================================
// Marker Loading Tests
// ============================================================================

#[test]
fn test_load_markers_returns_one_entry_per_file() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["alpha", "beta", "gamma"] {
        write_file(temp_dir.path(), &format!("{name}.json"), &marker_json(name));
    }

    let markers = load_markers(temp_dir.path()).unwrap();

    assert_eq!(markers.len(), 3);
    let keys: Vec<&str> = markers.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["alpha", "beta", "gamma"]);
    assert_eq!(markers["beta"]["name_id"], "beta");
}

#[test]
fn test_load_markers_key_stops_at_first_dot() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "castle.v2.json", &marker_json("castle"));

    let markers = load_markers(temp_dir.path()).unwrap();
    assert!(markers.contains_key("castle"));
}

#[test]
fn test_load_markers_skips_subdirectories() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "a.json", &marker_json("a"));
    fs::create_dir(temp_dir.path().join("nested")).unwrap();
    write_file(&temp_dir.path().join("nested"), "b.json", &marker_json("b"));

    let markers = load_markers(temp_dir.path()).unwrap();
    assert_eq!(markers.len(), 1);
    assert!(markers.contains_key("a"));
}

#[test]
fn test_load_markers_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let markers = load_markers(temp_dir.path()).unwrap();
    assert!(markers.is_empty());
}

#[test]
fn test_load_markers_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    let result = load_markers(&missing);
    assert!(matches!(result, Err(MapError::DirectoryNotFound(path)) if path == missing));
}

#[test]
fn test_load_markers_malformed_json_aborts() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "good.json", &marker_json("good"));
    write_file(temp_dir.path(), "bad.json", "{ not json");

    let result = load_markers(temp_dir.path());
    match result {
        Err(MapError::Json { path, .. }) => assert!(path.ends_with("bad.json")),
        other => panic!("expected a JSON error, got {:?}", other),
    }
}

#[test]
fn test_load_marker_records_parses_legacy_sentinels() {
    let temp_dir = TempDir::new().unwrap();
    write_file(
        temp_dir.path(),
        "old.json",
        r#"{"name_id":"old","loc":[3.0,4.0],"name_code":"Old","img_url":"i","wiki_link":"None","marker_color":false,"marker_icon":"star","marker_icon_prefix":false}"#,
    );

    let records = load_marker_records(temp_dir.path()).unwrap();
    let record = &records["old"];

    assert_eq!(record.loc, [3.0, 4.0]);
    assert_eq!(record.marker_color, StyleOverride::Default);
    assert_eq!(record.marker_icon_prefix, StyleOverride::Default);
    assert_eq!(record.site_link, "");
}

#[test]
fn test_load_marker_records_reports_bad_record() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "noloc.json", r#"{"name_code":"X"}"#);

    let result = load_marker_records(temp_dir.path());
    assert!(matches!(result, Err(MapError::InvalidMarker { key, .. }) if key == "noloc"));
}

// ============================================================================
// Area Loading Tests
// ============================================================================

#[test]
fn test_load_areas_returns_all_files() {
    let temp_dir = TempDir::new().unwrap();
    write_file(
        temp_dir.path(),
        "lake.geojson",
        r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1.0,2.0]},"properties":{}}"#,
    );
    write_file(
        temp_dir.path(),
        "forest.geojson",
        r#"{"type":"FeatureCollection","features":[]}"#,
    );

    let areas = load_areas(temp_dir.path()).unwrap();
    assert_eq!(areas.len(), 2);
}

#[test]
fn test_load_named_areas_keeps_stems() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "b.json", r#"{"type":"FeatureCollection","features":[]}"#);
    write_file(temp_dir.path(), "a.json", r#"{"type":"FeatureCollection","features":[]}"#);

    let areas = load_named_areas(temp_dir.path()).unwrap();
    let stems: Vec<&str> = areas.iter().map(|(stem, _)| stem.as_str()).collect();
    assert_eq!(stems, vec!["a", "b"]);
}

#[test]
fn test_load_areas_missing_directory() {
    let result = load_areas(Path::new("/definitely/not/here"));
    assert!(matches!(result, Err(MapError::DirectoryNotFound(_))));
}

#[test]
fn test_list_data_files_sorted() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["c.json", "a.json", "b.json"] {
        write_file(temp_dir.path(), name, "{}");
    }

    let files = list_data_files(temp_dir.path()).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.json", "b.json", "c.json"]);
}
