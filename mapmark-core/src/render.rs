// Attach areas and markers to a map

use crate::error::{MapError, Result};
use crate::map::{GeoJsonOverlay, Icon, LayerGroup, Map, Marker};
use crate::model::{AreaStyle, MarkerRecord};
use crate::popup::build_popup;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Attach one styled overlay per area, in input order.
///
/// `areas`, `names` and `styles` are aligned by index. Nothing is attached
/// when their lengths differ.
pub fn add_areas(
    areas: &[Value],
    names: &[String],
    styles: &[AreaStyle],
    map: &mut Map,
) -> Result<()> {
    if areas.len() != names.len() || areas.len() != styles.len() {
        return Err(MapError::MisalignedAreas {
            areas: areas.len(),
            names: names.len(),
            styles: styles.len(),
        });
    }

    for ((area, name), style) in areas.iter().zip(names).zip(styles) {
        debug!("Adding area '{}'", name);
        map.add_overlay(GeoJsonOverlay {
            name: name.clone(),
            data: area.clone(),
            style: style.clone(),
        });
    }

    Ok(())
}

/// Icon for a marker; either sentinel on color or prefix selects the defaults
pub fn icon_for(record: &MarkerRecord) -> Icon {
    if record.uses_default_style() {
        Icon {
            color: None,
            icon: record.marker_icon.clone(),
            prefix: None,
        }
    } else {
        Icon {
            color: record.marker_color.as_deref().map(str::to_string),
            icon: record.marker_icon.clone(),
            prefix: record.marker_icon_prefix.as_deref().map(str::to_string),
        }
    }
}

/// Build the pin for one marker record
pub fn marker_for(record: &MarkerRecord) -> Marker {
    Marker {
        location: record.loc,
        popup: build_popup(record),
        icon: icon_for(record),
    }
}

/// Attach one pin per record to `group`, in key order. Returns the number added.
pub fn add_markers(markers: &BTreeMap<String, MarkerRecord>, group: &mut LayerGroup) -> usize {
    for (key, record) in markers {
        debug!("Adding marker '{}' to group '{}'", key, group.name());
        group.add_marker(marker_for(record));
    }
    markers.len()
}

/// Parse raw loaded values and attach them, failing on the first bad record
pub fn add_marker_values(
    markers: &BTreeMap<String, Value>,
    group: &mut LayerGroup,
) -> Result<usize> {
    let records = markers
        .iter()
        .map(|(key, value)| -> Result<(String, MarkerRecord)> {
            Ok((key.clone(), MarkerRecord::from_value(key, value.clone())?))
        })
        .collect::<Result<BTreeMap<_, _>>>()?;
    Ok(add_markers(&records, group))
}
