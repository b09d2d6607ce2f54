//! Gray-level quantization
//!
//! Reduces intensity precision by snapping every sample down to the nearest
//! multiple of a step factor: `v -> (v / F) * F`. The original intensity
//! scale is kept, so fewer distinct levels appear as visible banding rather
//! than as a stretched palette.

use crate::{ColorError, ColorResult};
use log::debug;
use pixres_core::{Factor, Image, PixelDepth};

/// Number of output levels gray-level reduction can produce.
///
/// Multiples of `factor` in `[0, max]`, i.e. `ceil((max + 1) / F)`. A factor
/// larger than the maximum sample value leaves a single level (0).
pub fn quantization_levels(depth: PixelDepth, factor: Factor) -> u32 {
    depth.levels().div_ceil(factor.get())
}

/// Build the 8-bit lookup table for a quantization step.
fn build_table(factor: Factor) -> [u8; 256] {
    let f = factor.get();
    let mut table = [0u8; 256];
    for (v, out) in table.iter_mut().enumerate() {
        // (v / f) * f <= v <= 255
        *out = ((v as u32 / f) * f) as u8;
    }
    table
}

/// Reduce the number of gray levels of an image.
///
/// Each sample `v` of every channel becomes `(v / F) * F` using integer
/// division. The result never exceeds the input and is always a multiple of
/// `F`; `F = 1` leaves the image unchanged and `F > 255` maps everything to 0.
///
/// # Errors
///
/// Returns [`ColorError::UnsupportedDepth`] for images that are not 8 bpp.
///
/// # Arguments
/// * `image` - Input image
/// * `factor` - Quantization step
///
/// # Examples
///
/// ```
/// use pixres_core::{Factor, Image};
/// use pixres_color::gray_level_reduction;
///
/// let img = Image::from_raw(2, 1, 1, vec![200, 201]).unwrap();
/// let out = gray_level_reduction(&img, Factor::new(8).unwrap()).unwrap();
/// assert_eq!(out.data(), &[200, 200]);
/// ```
pub fn gray_level_reduction(image: &Image, factor: Factor) -> ColorResult<Image> {
    if image.depth() != PixelDepth::Bit8 {
        return Err(ColorError::UnsupportedDepth {
            expected: "8 bpp",
            actual: image.depth().bits(),
        });
    }
    if factor.is_identity() {
        return Ok(image.clone());
    }

    let table = build_table(factor);
    let mut out = image.to_mut();
    for v in out.data_mut() {
        *v = table[*v as usize];
    }

    debug!(
        "gray_level_reduction: factor {} leaves at most {} levels",
        factor,
        quantization_levels(image.depth(), factor)
    );
    Ok(out.into())
}
