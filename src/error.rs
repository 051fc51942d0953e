use std::path::PathBuf;
use thiserror::Error;

use crate::geom::RectId;

/// The main error type for rectoverlap operations.
#[derive(Debug, Error)]
pub enum OverlapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed rectangle: expected 4 coordinates (two corners), got {len}")]
    MalformedRect { len: usize },

    #[error("Duplicate rectangle ID {0}")]
    DuplicateId(RectId),

    #[error("Failed to parse rectangle JSON from {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write overlap JSON: {source}")]
    JsonWrite {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse rectangle CSV from {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Found {count} overlap region(s)")]
    OverlapsFound { count: usize },
}
