// Map export to a standalone Leaflet page

use crate::error::Result;
use crate::map::Map;
use crate::popup::escape_html;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const AWESOME_MARKERS_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css";
const AWESOME_MARKERS_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.js";
const GLYPHICONS_CSS: &str = "https://netdna.bootstrapcdn.com/bootstrap/3.0.0/css/bootstrap-glyphicons.css";
const FONT_AWESOME_CSS: &str =
    "https://cdn.jsdelivr.net/npm/@fortawesome/fontawesome-free@6.2.0/css/all.min.css";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Json,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Some(ExportFormat::Html),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }

    /// Guess the format from an output path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_str)
    }
}

/// Render the map as a complete HTML document
pub fn to_html(map: &Map) -> Result<String> {
    let options = map.options();
    let tiles = map.tiles();
    let mut page = String::new();

    // Head
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("  <meta charset=\"UTF-8\" />\n");
    page.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n",
    );
    page.push_str(&format!("  <title>{}</title>\n", escape_html(&options.title)));
    for css in [LEAFLET_CSS, AWESOME_MARKERS_CSS, GLYPHICONS_CSS, FONT_AWESOME_CSS] {
        page.push_str(&format!("  <link rel=\"stylesheet\" href=\"{}\" />\n", css));
    }
    page.push_str("  <style>\n");
    page.push_str("    html, body { height: 100%; margin: 0; padding: 0; }\n");
    page.push_str("    #map { height: 100%; width: 100%; }\n");
    page.push_str("  </style>\n");
    page.push_str("</head>\n<body>\n");
    page.push_str("  <div id=\"map\"></div>\n");
    for js in [LEAFLET_JS, AWESOME_MARKERS_JS] {
        page.push_str(&format!("  <script src=\"{}\"></script>\n", js));
    }

    // Map and tiles
    page.push_str("  <script>\n");
    page.push_str(&format!(
        "    const map = L.map('map').setView({}, {});\n",
        script_json(&options.center)?,
        options.zoom
    ));
    page.push_str(&format!(
        "    L.tileLayer({}, {{ maxZoom: {}, attribution: {} }}).addTo(map);\n",
        script_json(&tiles.url)?,
        tiles.max_zoom,
        script_json(&tiles.attribution)?
    ));
    page.push_str("    const overlays = [];\n");

    // Areas, each with its own literal style
    for (idx, overlay) in map.overlays().iter().enumerate() {
        page.push_str(&format!(
            "    const area_{idx} = L.geoJSON({}, {{ style: function () {{ return {}; }} }}).addTo(map);\n",
            script_json(&overlay.data)?,
            script_json(&overlay.style)?
        ));
        page.push_str(&format!(
            "    overlays.push([{}, area_{idx}]);\n",
            script_json(&overlay.name)?
        ));
    }

    // Marker groups
    for (idx, group) in map.groups().iter().enumerate() {
        page.push_str(&format!("    const group_{idx} = L.featureGroup().addTo(map);\n"));
        for marker in group.markers() {
            let icon = &marker.icon;
            page.push_str(&format!(
                "    L.marker({}, {{ icon: L.AwesomeMarkers.icon({{ icon: {}, prefix: {}, markerColor: {}, iconColor: 'white' }}) }}).bindPopup({}).addTo(group_{idx});\n",
                script_json(&marker.location)?,
                script_json(icon.resolved_icon())?,
                script_json(icon.resolved_prefix())?,
                script_json(icon.resolved_color())?,
                script_json(&marker.popup)?
            ));
        }
        page.push_str(&format!(
            "    overlays.push([{}, group_{idx}]);\n",
            script_json(group.name())?
        ));
    }

    if options.layer_control {
        // one entry per layer, even when display names repeat
        page.push_str("    const layerControl = L.control.layers(null, null).addTo(map);\n");
        page.push_str(
            "    overlays.forEach(([name, layer]) => layerControl.addOverlay(layer, name));\n",
        );
    }

    page.push_str("  </script>\n</body>\n</html>\n");
    Ok(page)
}

/// Summarize the map contents as pretty JSON
pub fn to_json_summary(map: &Map) -> Result<String> {
    let summary = serde_json::json!({
        "map": {
            "metadata": {
                "generator": "mapmark",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
            },
            "view": map.options(),
            "tiles": map.tiles(),
            "summary": {
                "total_areas": map.overlays().len(),
                "total_groups": map.groups().len(),
                "total_markers": map.marker_count(),
            },
            "areas": map.overlays().iter().map(|o| {
                serde_json::json!({ "name": o.name, "style": o.style })
            }).collect::<Vec<_>>(),
            "groups": map.groups().iter().map(|g| {
                serde_json::json!({ "name": g.name(), "markers": g.markers().len() })
            }).collect::<Vec<_>>(),
        }
    });

    Ok(serde_json::to_string_pretty(&summary)?)
}

/// Render the map in the requested format
pub fn render(map: &Map, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Html => to_html(map),
        ExportFormat::Json => to_json_summary(map),
    }
}

pub fn save_map(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

// JSON for inline <script>: no literal '<' can close the tag early
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}
