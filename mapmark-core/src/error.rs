use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid marker '{key}': {source}")]
    InvalidMarker {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON object at the top level of {}", .0.display())]
    NotAnObject(PathBuf),

    #[error("Area lists are misaligned: {areas} areas, {names} names, {styles} styles")]
    MisalignedAreas {
        areas: usize,
        names: usize,
        styles: usize,
    },

    #[error("Invalid geoJSON: {0}")]
    InvalidGeoJson(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl MapError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MapError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        MapError::Json {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
