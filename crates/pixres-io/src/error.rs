//! Errors raised while decoding or encoding image files

use thiserror::Error;

/// Image file error
#[derive(Error, Debug)]
pub enum IoError {
    /// Opening, reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown extension or magic number, a feature-gated format that is
    /// disabled, or a channel count the target format cannot store
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Truncated or non-numeric PNM header, or a size that cannot be addressed
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// PNG/JPEG decoder failure or a truncated PNM raster
    #[error("decode error: {0}")]
    DecodeError(String),

    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded geometry rejected by [`pixres_core::Image`]
    #[error("core error: {0}")]
    Core(#[from] pixres_core::Error),
}

pub type IoResult<T> = Result<T, IoError>;
