// Map element tree: map container, tile layer, overlays, groups and pins

use crate::model::AreaStyle;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_MARKER_COLOR: &str = "blue";
pub const DEFAULT_ICON_PREFIX: &str = "glyphicon";
pub const DEFAULT_ICON: &str = "info-sign";

/// View settings for a map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    /// `[lat, lon]` of the initial view
    #[serde(default = "default_center")]
    pub center: [f64; 2],

    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// A named tile provider or a `{z}/{x}/{y}` URL template
    #[serde(default = "default_tiles")]
    pub tiles: String,

    /// Show a control for toggling overlays and groups
    #[serde(default = "default_layer_control")]
    pub layer_control: bool,

    #[serde(default = "default_title")]
    pub title: String,
}

fn default_center() -> [f64; 2] {
    [0.0, 0.0]
}
fn default_zoom() -> u8 {
    2
}
fn default_tiles() -> String {
    "OpenStreetMap".to_string()
}
fn default_layer_control() -> bool {
    true
}
fn default_title() -> String {
    "mapmark".to_string()
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: default_center(),
            zoom: default_zoom(),
            tiles: default_tiles(),
            layer_control: default_layer_control(),
            title: default_title(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl TileLayer {
    /// Resolve a provider name. Anything unrecognized is used as a URL template.
    pub fn from_name(name: &str) -> Self {
        let (url, attribution) = match name.to_lowercase().as_str() {
            "openstreetmap" | "osm" => (
                "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
            ),
            "opentopomap" => (
                "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
                "Map data: &copy; OpenStreetMap contributors, SRTM | Map style: &copy; OpenTopoMap (CC-BY-SA)",
            ),
            "cartodb positron" | "cartodbpositron" => (
                "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
                "&copy; OpenStreetMap contributors &copy; CARTO",
            ),
            "cartodb dark_matter" | "cartodbdark_matter" => (
                "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
                "&copy; OpenStreetMap contributors &copy; CARTO",
            ),
            _ => (name, ""),
        };

        Self {
            url: url.to_string(),
            attribution: attribution.to_string(),
            max_zoom: 18,
        }
    }
}

/// Pin icon descriptor. `None` means the map's default.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Icon {
    pub color: Option<String>,
    pub icon: String,
    pub prefix: Option<String>,
}

impl Icon {
    pub fn resolved_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_MARKER_COLOR)
    }

    pub fn resolved_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_ICON_PREFIX)
    }

    pub fn resolved_icon(&self) -> &str {
        if self.icon.is_empty() {
            DEFAULT_ICON
        } else {
            &self.icon
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// `[lat, lon]`
    pub location: [f64; 2],
    pub popup: String,
    pub icon: Icon,
}

/// Styled geoJSON overlay. The style is owned per overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoJsonOverlay {
    pub name: String,
    pub data: Value,
    pub style: AreaStyle,
}

/// Named collection of pins toggled together
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerGroup {
    name: String,
    markers: Vec<Marker>,
}

impl LayerGroup {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            markers: Vec::new(),
        }
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

#[derive(Debug, Clone)]
pub struct Map {
    options: MapOptions,
    tiles: TileLayer,
    overlays: Vec<GeoJsonOverlay>,
    groups: Vec<LayerGroup>,
}

impl Map {
    pub fn new(options: MapOptions) -> Self {
        let tiles = TileLayer::from_name(&options.tiles);
        Self {
            options,
            tiles,
            overlays: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn add_overlay(&mut self, overlay: GeoJsonOverlay) {
        self.overlays.push(overlay);
    }

    pub fn add_group(&mut self, group: LayerGroup) {
        self.groups.push(group);
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn tiles(&self) -> &TileLayer {
        &self.tiles
    }

    pub fn overlays(&self) -> &[GeoJsonOverlay] {
        &self.overlays
    }

    pub fn groups(&self) -> &[LayerGroup] {
        &self.groups
    }

    pub fn marker_count(&self) -> usize {
        self.groups.iter().map(|g| g.markers().len()).sum()
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new(MapOptions::default())
    }
}
