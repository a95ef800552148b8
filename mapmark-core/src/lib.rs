pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod map;
pub mod model;
pub mod normalize;
pub mod popup;
pub mod project;
pub mod render;

pub use error::{MapError, Result};
pub use loader::{load_areas, load_marker_records, load_markers, load_named_areas};
pub use map::{GeoJsonOverlay, Icon, LayerGroup, Map, MapOptions, Marker};
pub use model::{AreaStyle, MarkerRecord, StyleOverride};
pub use normalize::{NormalizeSummary, normalize_markers};
pub use popup::build_popup;
pub use render::{add_areas, add_markers};
