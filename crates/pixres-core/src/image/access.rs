//! Sample access functions
//!
//! Row, pixel and single-sample accessors for [`Image`] and [`ImageMut`].
//! Pixel accessors return the interleaved samples of one pixel as a slice.

use super::{Image, ImageMut};
use crate::error::{Error, Result};

#[inline]
fn pixel_offset(width: u32, channels: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * channels as usize
}

impl Image {
    /// Get the samples of the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let start = pixel_offset(self.width(), self.channels(), x, y);
        Some(&self.data()[start..start + self.channels() as usize])
    }

    /// Get one sample of the pixel at (x, y).
    ///
    /// Returns `None` if coordinates or channel are out of bounds.
    pub fn get_sample(&self, x: u32, y: u32, channel: u32) -> Option<u8> {
        if channel >= self.channels() {
            return None;
        }
        self.get_pixel(x, y).map(|px| px[channel as usize])
    }

    /// Get the samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let len = self.row_len();
        let start = y as usize * len;
        &self.data()[start..start + len]
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data().chunks_exact(self.row_len())
    }
}

impl ImageMut {
    /// Get the samples of the pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let start = pixel_offset(self.width(), self.channels(), x, y);
        Some(&self.data()[start..start + self.channels() as usize])
    }

    /// Set the samples of the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds and
    /// [`Error::InvalidParameter`] if `samples` does not hold exactly one
    /// value per channel.
    pub fn set_pixel(&mut self, x: u32, y: u32, samples: &[u8]) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        let channels = self.channels() as usize;
        if samples.len() != channels {
            return Err(Error::InvalidParameter(format!(
                "expected {channels} samples per pixel, got {}",
                samples.len()
            )));
        }
        let start = pixel_offset(self.width(), self.channels(), x, y);
        self.data_mut()[start..start + channels].copy_from_slice(samples);
        Ok(())
    }

    /// Get the samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let len = self.row_len();
        let start = y as usize * len;
        &self.data()[start..start + len]
    }

    /// Get mutable samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let len = self.row_len();
        let start = y as usize * len;
        &mut self.data_mut()[start..start + len]
    }
}
