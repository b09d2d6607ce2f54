//! Integer-factor sampling
//!
//! Nearest-neighbor resolution changes by a whole-number [`Factor`]:
//!
//! - [`down_sample`] keeps every F-th row and column, starting at index 0
//! - [`up_sample`] replicates each pixel into an F×F block
//!
//! Both operate on every channel of the image, so gray, gray+alpha, RGB and
//! RGBA inputs are handled identically.

use crate::{TransformError, TransformResult};
use log::debug;
use pixres_core::{Factor, Image};

/// Down-sample an image by point sampling.
///
/// The output contains input rows and columns `0, F, 2F, ...`, giving
/// dimensions `ceil(H/F) × ceil(W/F)`. No averaging is performed.
///
/// # Arguments
/// * `image` - Input image
/// * `factor` - Sampling stride
pub fn down_sample(image: &Image, factor: Factor) -> TransformResult<Image> {
    if factor.is_identity() {
        return Ok(image.clone());
    }

    let f = factor.get();
    let (w, h) = image.dimensions();
    let channels = image.channels() as usize;
    let out_w = w.div_ceil(f);
    let out_h = h.div_ceil(f);

    let mut data = Vec::with_capacity(out_w as usize * out_h as usize * channels);
    for row in image.rows().step_by(f as usize) {
        for px in row.chunks_exact(channels).step_by(f as usize) {
            data.extend_from_slice(px);
        }
    }

    debug!("down_sample: {w}x{h} -> {out_w}x{out_h} (factor {f})");
    Ok(Image::from_raw(out_w, out_h, image.channels(), data)?)
}

/// Up-sample an image by nearest-neighbor replication.
///
/// Output pixel `(x, y)` takes the value of input pixel `(x / F, y / F)`,
/// giving dimensions `(H·F) × (W·F)`. Each source row is widened once and the
/// widened row is then copied F times.
///
/// # Arguments
/// * `image` - Input image
/// * `factor` - Replication multiple
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if the output size
/// overflows or its buffer cannot be allocated.
pub fn up_sample(image: &Image, factor: Factor) -> TransformResult<Image> {
    if factor.is_identity() {
        return Ok(image.clone());
    }

    let f = factor.get();
    let (w, h) = image.dimensions();
    let channels = image.channels() as usize;
    let overflow = || {
        TransformError::InvalidParameters(format!(
            "up_sample output too large: {w}x{h} by factor {f}"
        ))
    };
    let out_w = w.checked_mul(f).ok_or_else(overflow)?;
    let out_h = h.checked_mul(f).ok_or_else(overflow)?;
    let out_row = (out_w as usize)
        .checked_mul(channels)
        .ok_or_else(overflow)?;
    let total = out_row.checked_mul(out_h as usize).ok_or_else(overflow)?;

    let mut data = Vec::new();
    data.try_reserve_exact(total).map_err(|_| overflow())?;
    let mut wide = Vec::new();
    wide.try_reserve_exact(out_row).map_err(|_| overflow())?;
    for row in image.rows() {
        wide.clear();
        for px in row.chunks_exact(channels) {
            for _ in 0..f {
                wide.extend_from_slice(px);
            }
        }
        for _ in 0..f {
            data.extend_from_slice(&wide);
        }
    }

    debug!("up_sample: {w}x{h} -> {out_w}x{out_h} (factor {f})");
    Ok(Image::from_raw(out_w, out_h, image.channels(), data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor(n: u32) -> Factor {
        Factor::new(n).unwrap()
    }

    fn ramp(w: u32, h: u32) -> Image {
        Image::from_raw(w, h, 1, (0..w * h).map(|v| v as u8).collect()).unwrap()
    }

    #[test]
    fn test_down_sample_takes_every_nth() {
        // 0 1 2 3
        // 4 5 6 7
        // 8 9 10 11
        let img = ramp(4, 3);
        let out = down_sample(&img, factor(2)).unwrap();
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.data(), &[0, 2, 8, 10]);
    }

    #[test]
    fn test_down_sample_ceil_dimensions() {
        let img = ramp(7, 5);
        let out = down_sample(&img, factor(3)).unwrap();
        assert_eq!(out.dimensions(), (3, 2));
        assert_eq!(out.data(), &[0, 3, 6, 21, 24, 27]);
    }

    #[test]
    fn test_down_sample_factor_larger_than_image() {
        let img = ramp(3, 2);
        let out = down_sample(&img, factor(10)).unwrap();
        assert_eq!(out.dimensions(), (1, 1));
        assert_eq!(out.data(), &[0]);
    }

    #[test]
    fn test_down_sample_rgb() {
        let img = Image::from_raw(2, 1, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let out = down_sample(&img, factor(2)).unwrap();
        assert_eq!(out.channels(), 3);
        assert_eq!(out.data(), &[1, 2, 3]);
    }

    #[test]
    fn test_up_sample_blocks() {
        let img = Image::from_raw(2, 1, 1, vec![10, 20]).unwrap();
        let out = up_sample(&img, factor(2)).unwrap();
        assert_eq!(out.dimensions(), (4, 2));
        assert_eq!(out.data(), &[10, 10, 20, 20, 10, 10, 20, 20]);
    }

    #[test]
    fn test_up_sample_rgb() {
        let img = Image::from_raw(1, 1, 3, vec![1, 2, 3]).unwrap();
        let out = up_sample(&img, factor(3)).unwrap();
        assert_eq!(out.dimensions(), (3, 3));
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(out.get_pixel(x, y), Some(&[1u8, 2, 3][..]));
            }
        }
    }

    #[test]
    fn test_up_sample_overflow() {
        let img = Image::new(2, 1, 1).unwrap();
        let err = up_sample(&img, factor(u32::MAX)).unwrap_err();
        assert!(matches!(err, TransformError::InvalidParameters(_)));
    }

    #[test]
    fn test_up_sample_unallocatable() {
        // Fits in u32 per side, but the buffer exceeds isize::MAX
        let img = Image::new(1, 1, 1).unwrap();
        let err = up_sample(&img, factor(u32::MAX)).unwrap_err();
        assert!(matches!(err, TransformError::InvalidParameters(_)));

        let rgba = Image::new(1, 1, 4).unwrap();
        let err = crate::resample(&rgba, factor(u32::MAX)).unwrap_err();
        assert!(matches!(err, TransformError::InvalidParameters(_)));
    }

    #[test]
    fn test_identity_factor() {
        let img = ramp(5, 4);
        assert_eq!(down_sample(&img, Factor::ONE).unwrap(), img);
        assert_eq!(up_sample(&img, Factor::ONE).unwrap(), img);
    }
}
