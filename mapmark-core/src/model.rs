// Marker and area data types

use crate::error::{MapError, Result};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Sentinel value for "no wiki page" carried over from older data files
pub const NO_WIKI_LINK: &str = "None";

/// Icon color or glyph-set prefix for a marker.
///
/// Data files use either an empty string or the boolean `false` to ask for
/// the map's default styling. Both land on `StyleOverride::Default`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StyleOverride {
    #[default]
    Default,
    Named(String),
}

impl StyleOverride {
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            StyleOverride::Default => None,
            StyleOverride::Named(name) => Some(name.as_str()),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, StyleOverride::Default)
    }
}

impl From<&str> for StyleOverride {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            StyleOverride::Default
        } else {
            StyleOverride::Named(value.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for StyleOverride {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Name(String),
        }

        match Option::<Raw>::deserialize(deserializer)? {
            None | Some(Raw::Flag(false)) => Ok(StyleOverride::Default),
            Some(Raw::Flag(true)) => Err(de::Error::custom(
                "expected a style name or `false`, found `true`",
            )),
            Some(Raw::Name(name)) => Ok(StyleOverride::from(name.as_str())),
        }
    }
}

impl Serialize for StyleOverride {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_deref().unwrap_or(""))
    }
}

/// One point annotation, as stored in `<name_id>.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerRecord {
    #[serde(default, deserialize_with = "string_or_null")]
    pub name_id: String,
    /// `[lat, lon]`
    pub loc: [f64; 2],
    pub name_code: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub img_url: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub wiki_link: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub site_link: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub text: String,
    #[serde(default)]
    pub marker_color: StyleOverride,
    #[serde(default, deserialize_with = "string_or_null")]
    pub marker_icon: String,
    #[serde(default)]
    pub marker_icon_prefix: StyleOverride,
}

impl MarkerRecord {
    pub fn new(name_id: &str, loc: [f64; 2], name_code: &str) -> Self {
        Self {
            name_id: name_id.to_string(),
            loc,
            name_code: name_code.to_string(),
            img_url: String::new(),
            wiki_link: String::new(),
            site_link: String::new(),
            text: String::new(),
            marker_color: StyleOverride::Default,
            marker_icon: String::new(),
            marker_icon_prefix: StyleOverride::Default,
        }
    }

    /// Parse a loaded JSON value. `key` is the file stem, used for errors
    /// and as the `name_id` when the file leaves it blank.
    pub fn from_value(key: &str, value: serde_json::Value) -> Result<Self> {
        let mut record: MarkerRecord =
            serde_json::from_value(value).map_err(|source| MapError::InvalidMarker {
                key: key.to_string(),
                source,
            })?;
        if record.name_id.is_empty() {
            record.name_id = key.to_string();
        }
        Ok(record)
    }

    pub fn has_wiki_link(&self) -> bool {
        !self.wiki_link.is_empty() && self.wiki_link != NO_WIKI_LINK
    }

    pub fn has_site_link(&self) -> bool {
        !self.site_link.is_empty()
    }

    /// True when either the color or the prefix asks for default styling
    pub fn uses_default_style(&self) -> bool {
        self.marker_color.is_default() || self.marker_icon_prefix.is_default()
    }
}

fn string_or_null<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Fill and stroke styling for one area overlay.
///
/// Field names follow Leaflet path options so the struct serializes
/// straight into the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaStyle {
    pub fill_color: String,
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
}

fn default_opacity() -> f64 {
    1.0
}

impl AreaStyle {
    pub fn new(fill_color: &str, color: &str, opacity: f64) -> Self {
        Self {
            fill_color: fill_color.to_string(),
            color: color.to_string(),
            opacity,
            weight: None,
            fill_opacity: None,
        }
    }
}

impl Default for AreaStyle {
    fn default() -> Self {
        Self::new("#3388ff", "#3388ff", default_opacity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_style_override_from_false() {
        let record = MarkerRecord::from_value(
            "a",
            json!({"loc": [0.0, 0.0], "name_code": "A", "marker_color": false, "marker_icon_prefix": false}),
        )
        .unwrap();
        assert_eq!(record.marker_color, StyleOverride::Default);
        assert!(record.uses_default_style());
    }

    #[test]
    fn test_style_override_rejects_true() {
        let result = MarkerRecord::from_value(
            "a",
            json!({"loc": [0.0, 0.0], "name_code": "A", "marker_color": true}),
        );
        assert!(matches!(result, Err(MapError::InvalidMarker { .. })));
    }

    #[test]
    fn test_name_id_falls_back_to_key() {
        let record =
            MarkerRecord::from_value("castle", json!({"loc": [1.0, 2.0], "name_code": "C"})).unwrap();
        assert_eq!(record.name_id, "castle");
        assert_eq!(record.wiki_link, "");
    }

    #[test]
    fn test_null_strings_become_empty() {
        let record = MarkerRecord::from_value(
            "a",
            json!({"loc": [0.0, 0.0], "name_code": "A", "site_link": null, "text": null}),
        )
        .unwrap();
        assert!(!record.has_site_link());
        assert_eq!(record.text, "");
    }

    #[test]
    fn test_missing_loc_is_an_error() {
        let result = MarkerRecord::from_value("a", json!({"name_code": "A"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_area_style_camel_case() {
        let style = AreaStyle::new("#ff0000", "#000000", 0.5);
        let value = serde_json::to_value(&style).unwrap();
        assert_eq!(
            value,
            json!({"fillColor": "#ff0000", "color": "#000000", "opacity": 0.5})
        );
    }
}
