//! pixres Color - Intensity processing
//!
//! - **Gray-level reduction** ([`quantize`]): floor-division quantization of
//!   sample values to multiples of a step factor

pub mod error;
pub mod quantize;

// Re-export core types
pub use pixres_core;

pub use error::{ColorError, ColorResult};
pub use quantize::{gray_level_reduction, quantization_levels};
