//! Error types for pixres-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// pixres core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid pixel depth
    #[error("invalid pixel depth: {0} bpp")]
    InvalidDepth(u32),

    /// Channel count outside 1..=4
    #[error("invalid channel count: {0} (expected 1 to 4)")]
    InvalidChannels(u32),

    /// Factor must be a positive integer
    #[error("invalid factor: {0} (must be >= 1)")]
    InvalidFactor(i64),

    /// Raw sample buffer does not match the declared geometry
    #[error("sample buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for pixres operations
pub type Result<T> = std::result::Result<T, Error>;
