//! Error types for batch runs

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or running a batch
#[derive(Debug, Error)]
pub enum BatchError {
    /// The configuration file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for a batch
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Image decoding, encoding or file access failed
    #[error("io error: {0}")]
    Io(#[from] pixres_io::IoError),

    /// Spatial transform failed
    #[error("transform error: {0}")]
    Transform(#[from] pixres_transform::TransformError),

    /// Gray-level transform failed
    #[error("color error: {0}")]
    Color(#[from] pixres_color::ColorError),
}

/// Result type for batch operations
pub type BatchResult<T> = Result<T, BatchError>;
