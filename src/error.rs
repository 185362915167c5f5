use std::path::PathBuf;

/// All errors produced by Clamp Studio.
///
/// Panel edits never fail; these cover the edges around them: viewport
/// construction, configuration files, serialized snapshots and labels.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    /// Viewport bounds that would divide by zero or run backwards.
    #[error("invalid viewport: min width {min} must be finite and below max width {max}")]
    InvalidViewport { min: f64, max: f64 },

    /// A size label outside the fixed typographic set.
    #[error("unknown size label: {0}")]
    UnknownSizeLabel(String),

    /// A color label outside the fixed palette set.
    #[error("unknown color label: {0}")]
    UnknownColorLabel(String),

    /// A serialized table is missing one of its labels.
    #[error("missing value for label `{0}`")]
    MissingLabel(&'static str),

    /// A configured size is NaN or infinite.
    #[error("size for `{label}` must be finite, got {value}")]
    NonFiniteSize { label: &'static str, value: f64 },

    /// Configuration file could not be read.
    #[error("cannot read config '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for the expected shape.
    #[error("invalid config '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration file parsed but its values are rejected.
    #[error("invalid config '{}': {source}", .path.display())]
    ConfigInvalid {
        path: PathBuf,
        #[source]
        source: Box<StudioError>,
    },

    /// Snapshot or edit JSON could not be decoded.
    #[error("invalid panel payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StudioError>;
