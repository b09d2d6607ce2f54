//! pixres - Image resolution manipulation for Rust
//!
//! Spatial resampling and gray-level reduction of still images.
//!
//! # Overview
//!
//! - Nearest-neighbor down-sampling, up-sampling and resampling
//!   ([`transform`])
//! - Gray-level quantization ([`color`])
//! - Image I/O for PNG, JPEG and PNM ([`io`])
//! - Configurable batch runs over one input image ([`batch`])
//!
//! # Example
//!
//! ```
//! use pixres::{Factor, Image};
//! use pixres::transform::resample;
//! use pixres::color::gray_level_reduction;
//!
//! let img = Image::new_filled(64, 64, 1, 201).unwrap();
//! let coarse = resample(&img, Factor::new(8).unwrap()).unwrap();
//! assert_eq!(coarse.dimensions(), (64, 64));
//!
//! let banded = gray_level_reduction(&img, Factor::new(8).unwrap()).unwrap();
//! assert_eq!(banded.get_sample(0, 0, 0), Some(200));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixres_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixres_color as color;
pub use pixres_io as io;
pub use pixres_transform as transform;

pub mod batch;
