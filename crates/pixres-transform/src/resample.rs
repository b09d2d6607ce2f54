//! Resampling: down-sample then up-sample
//!
//! Simulates a lower spatial resolution while keeping the canvas size, so
//! results at several factors can be compared side by side.
//!
//! When a dimension is not a multiple of the factor, the up-sampled canvas is
//! larger than the input (`ceil(H/F)·F`). [`BoundaryPolicy`] decides whether
//! that canvas is trimmed back to the input size or returned as is.

use crate::TransformResult;
use crate::sample::{down_sample, up_sample};
use log::debug;
use pixres_core::{Factor, Image};

/// What to do with the canvas when a dimension is not divisible by the factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Crop the replicated canvas to the input dimensions
    #[default]
    Crop,
    /// Keep the full `ceil(H/F)·F × ceil(W/F)·F` canvas
    Extend,
}

/// Resample an image, preserving its dimensions.
///
/// Equivalent to [`resample_with_policy`] with [`BoundaryPolicy::Crop`].
/// Output pixel `(x, y)` equals input pixel `((x / F)·F, (y / F)·F)`.
///
/// # Examples
///
/// ```
/// use pixres_core::{Factor, Image};
/// use pixres_transform::resample;
///
/// let img = Image::new_filled(10, 10, 1, 200).unwrap();
/// let out = resample(&img, Factor::new(5).unwrap()).unwrap();
/// assert_eq!(out, img);
/// ```
pub fn resample(image: &Image, factor: Factor) -> TransformResult<Image> {
    resample_with_policy(image, factor, BoundaryPolicy::Crop)
}

/// Resample an image with an explicit boundary policy.
///
/// # Arguments
/// * `image` - Input image
/// * `factor` - Down-sampling stride and up-sampling multiple
/// * `policy` - Handling of the non-divisible remainder
pub fn resample_with_policy(
    image: &Image,
    factor: Factor,
    policy: BoundaryPolicy,
) -> TransformResult<Image> {
    if factor.is_identity() {
        return Ok(image.clone());
    }

    let small = down_sample(image, factor)?;
    let canvas = up_sample(&small, factor)?;

    match policy {
        BoundaryPolicy::Extend => Ok(canvas),
        BoundaryPolicy::Crop => {
            let (w, h) = image.dimensions();
            if canvas.dimensions() != (w, h) {
                debug!(
                    "resample: cropping {}x{} canvas to {w}x{h}",
                    canvas.width(),
                    canvas.height()
                );
            }
            Ok(canvas.crop(w, h)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor(n: u32) -> Factor {
        Factor::new(n).unwrap()
    }

    #[test]
    fn test_resample_divisible() {
        let img = Image::from_raw(4, 2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let out = resample(&img, factor(2)).unwrap();
        assert_eq!(out.dimensions(), (4, 2));
        assert_eq!(out.data(), &[1, 1, 3, 3, 1, 1, 3, 3]);
    }

    #[test]
    fn test_resample_crop_policy() {
        let img = Image::from_raw(3, 1, 1, vec![1, 2, 3]).unwrap();
        let out = resample(&img, factor(2)).unwrap();
        assert_eq!(out.dimensions(), (3, 1));
        assert_eq!(out.data(), &[1, 1, 3]);
    }

    #[test]
    fn test_resample_extend_policy() {
        let img = Image::from_raw(3, 1, 1, vec![1, 2, 3]).unwrap();
        let out = resample_with_policy(&img, factor(2), BoundaryPolicy::Extend).unwrap();
        assert_eq!(out.dimensions(), (4, 2));
        assert_eq!(out.data(), &[1, 1, 3, 3, 1, 1, 3, 3]);
    }

    #[test]
    fn test_resample_identity() {
        let img = Image::from_raw(3, 2, 1, vec![9, 8, 7, 6, 5, 4]).unwrap();
        for policy in [BoundaryPolicy::Crop, BoundaryPolicy::Extend] {
            assert_eq!(resample_with_policy(&img, Factor::ONE, policy).unwrap(), img);
        }
    }
}
