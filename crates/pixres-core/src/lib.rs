//! pixres Core - Basic data structures for resolution manipulation
//!
//! This crate provides the fundamental data structures used throughout
//! the pixres workspace:
//!
//! - [`Image`] / [`ImageMut`] - The sample grid container (immutable / mutable)
//! - [`PixelDepth`] - Declared bits per sample
//! - [`Factor`] - Positive integer stride / multiple / quantization step
//! - [`Error`] - Core error type

pub mod error;
pub mod factor;
pub mod image;

pub use error::{Error, Result};
pub use factor::Factor;
pub use image::{Image, ImageDiff, ImageMut, MAX_CHANNELS, PixelDepth};
