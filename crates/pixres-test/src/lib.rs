//! pixres-test - Regression test framework for pixres
//!
//! Provides a small regression harness modelled on a classic `regutils`
//! style driver, plus synthetic image fixtures so that regression tests do
//! not depend on binary test data.
//!
//! # Usage
//!
//! ```ignore
//! use pixres_test::{RegParams, gradient_image};
//!
//! let mut rp = RegParams::new("resample");
//! let img = gradient_image(16, 16, 1).unwrap();
//! rp.compare_values(16.0, img.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pixres_core::Image;

/// Image whose samples encode their position: `(x * 7 + y * 13 + c * 31) mod 256`.
///
/// Every pixel of a small fixture is distinguishable, which makes index
/// mistakes in sampling code visible.
pub fn gradient_image(width: u32, height: u32, channels: u32) -> TestResult<Image> {
    let mut data = Vec::with_capacity((width * height * channels) as usize);
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                data.push(((x * 7 + y * 13 + c * 31) % 256) as u8);
            }
        }
    }
    Image::from_raw(width, height, channels, data).map_err(|source| TestError::Fixture {
        name: "gradient",
        source,
    })
}

/// Image with every sample set to `value`.
pub fn uniform_image(width: u32, height: u32, channels: u32, value: u8) -> TestResult<Image> {
    Image::new_filled(width, height, channels, value).map_err(|source| TestError::Fixture {
        name: "uniform",
        source,
    })
}

/// Single-channel checkerboard of `cell × cell` squares alternating
/// between `dark` and `light`.
pub fn checker_image(width: u32, height: u32, cell: u32, dark: u8, light: u8) -> TestResult<Image> {
    let cell = cell.max(1);
    let mut data = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let on = ((x / cell) + (y / cell)) % 2 == 1;
            data.push(if on { light } else { dark });
        }
    }
    Image::from_raw(width, height, 1, data).map_err(|source| TestError::Fixture {
        name: "checker",
        source,
    })
}

/// Every 8-bit value once, laid out as a 16×16 single-channel image.
pub fn ramp_image() -> TestResult<Image> {
    Image::from_raw(16, 16, 1, (0..=255u8).collect()).map_err(|source| TestError::Fixture {
        name: "ramp",
        source,
    })
}
