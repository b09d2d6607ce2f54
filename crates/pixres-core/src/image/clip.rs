//! Clipping to a sub-region
//!
//! Rectangular crops anchored at the top-left corner, used to trim
//! block-replicated canvases back to a reference size.

use super::Image;
use crate::error::{Error, Result};

impl Image {
    /// Keep the top-left `width × height` region.
    ///
    /// Returns a shared clone when the requested size equals the current size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0 or
    /// larger than the image.
    pub fn crop(&self, width: u32, height: u32) -> Result<Image> {
        if width == 0 || height == 0 || width > self.width() || height > self.height() {
            return Err(Error::InvalidDimension { width, height });
        }
        if width == self.width() && height == self.height() {
            return Ok(self.clone());
        }

        let out_row = width as usize * self.channels() as usize;
        let mut data = Vec::with_capacity(out_row * height as usize);
        for row in self.rows().take(height as usize) {
            data.extend_from_slice(&row[..out_row]);
        }
        Image::from_raw(width, height, self.channels(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_top_left() {
        let img = Image::from_raw(3, 3, 1, (0..9).collect()).unwrap();
        let c = img.crop(2, 2).unwrap();
        assert_eq!(c.dimensions(), (2, 2));
        assert_eq!(c.data(), &[0, 1, 3, 4]);
    }

    #[test]
    fn test_crop_multichannel() {
        let img = Image::from_raw(2, 2, 2, (0..8).collect()).unwrap();
        let c = img.crop(1, 2).unwrap();
        assert_eq!(c.data(), &[0, 1, 4, 5]);
    }

    #[test]
    fn test_crop_same_size_shares() {
        let img = Image::new(4, 4, 1).unwrap();
        let c = img.crop(4, 4).unwrap();
        assert_eq!(img.ref_count(), 2);
        assert_eq!(c.dimensions(), (4, 4));
    }

    #[test]
    fn test_crop_too_large() {
        let img = Image::new(4, 4, 1).unwrap();
        assert!(img.crop(5, 4).is_err());
        assert!(img.crop(4, 0).is_err());
    }
}
