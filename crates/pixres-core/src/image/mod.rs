//! Image - The main sample grid container
//!
//! The `Image` structure is the fundamental data type in pixres. It holds a
//! `height × width × channels` grid of 8-bit samples.
//!
//! # Sample layout
//!
//! - One byte per sample
//! - Samples of a pixel are interleaved (`[c0, c1, ...]`)
//! - Rows are stored top to bottom with no padding
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for efficient cloning (shared ownership).
//! To modify sample data, convert to `ImageMut` via [`Image::try_into_mut`]
//! or [`Image::to_mut`], then convert back with `Into<Image>`.

mod access;
mod clip;
mod compare;
mod histogram;

pub use compare::ImageDiff;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Largest supported channel count (RGBA).
pub const MAX_CHANNELS: u32 = 4;

/// Pixel depth (bits per sample)
///
/// Declared explicitly on every image so that supporting another depth is a
/// matter of adding a variant rather than changing implicit assumptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum PixelDepth {
    /// 8 bits per sample
    #[default]
    Bit8 = 8,
}

impl PixelDepth {
    /// Create `PixelDepth` from a raw bit count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDepth`] for anything other than 8.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(PixelDepth::Bit8),
            _ => Err(Error::InvalidDepth(bits)),
        }
    }

    /// Get the number of bits per sample.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Get the maximum sample value representable at this depth.
    pub fn max_value(self) -> u32 {
        (1u32 << self.bits()) - 1
    }

    /// Number of distinct sample values at this depth.
    pub fn levels(self) -> u32 {
        self.max_value() + 1
    }
}

/// Internal image data
#[derive(Debug, Clone)]
struct ImageData {
    width: u32,
    height: u32,
    channels: u32,
    depth: PixelDepth,
    data: Vec<u8>,
}

impl ImageData {
    fn validate(width: u32, height: u32, channels: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if channels == 0 || channels > MAX_CHANNELS {
            return Err(Error::InvalidChannels(channels));
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels as usize))
            .ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "image too large: {width}x{height}x{channels}"
                ))
            })
    }
}

/// Image - Main sample grid container
///
/// `Image` uses reference counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use pixres_core::Image;
///
/// // Create a new 8-bit grayscale image
/// let img = Image::new(640, 480, 1).unwrap();
/// assert_eq!(img.width(), 640);
/// assert_eq!(img.height(), 480);
/// assert_eq!(img.channels(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new 8-bit image with the specified dimensions.
    ///
    /// The sample data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 and
    /// [`Error::InvalidChannels`] if `channels` is not in 1..=4.
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self> {
        Self::new_filled(width, height, channels, 0)
    }

    /// Create a new 8-bit image with every sample set to `value`.
    pub fn new_filled(width: u32, height: u32, channels: u32, value: u8) -> Result<Self> {
        let len = ImageData::validate(width, height, channels)?;
        Ok(Self::from_parts(width, height, channels, vec![value; len]))
    }

    /// Wrap an existing interleaved sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len()` differs from
    /// `width * height * channels`.
    pub fn from_raw(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Result<Self> {
        let expected = ImageData::validate(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_parts(width, height, channels, data))
    }

    fn from_parts(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Self {
        Image {
            inner: Arc::new(ImageData {
                width,
                height,
                channels,
                depth: PixelDepth::Bit8,
                data,
            }),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.inner.channels
    }

    /// Get the sample depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Number of bytes in one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.inner.width as usize * self.inner.channels as usize
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the number of strong references to this image.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two images have the same width, height, channels and depth.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.channels == other.inner.channels
            && self.inner.depth == other.inner.depth
    }

    /// Consume the image and return its sample buffer.
    ///
    /// Copies only when the buffer is shared.
    pub fn into_raw(self) -> Vec<u8> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => data.data,
            Err(arc) => arc.data.clone(),
        }
    }

    /// Try to get mutable access to the sample data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable image
///
/// Allows modification of sample data. Convert back to an immutable
/// [`Image`] using `Into<Image>`.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get samples per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.inner.channels
    }

    /// Get the sample depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Number of bytes in one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.inner.width as usize * self.inner.channels as usize
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the sample data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }
}

impl From<ImageMut> for Image {
    fn from(image: ImageMut) -> Self {
        Image {
            inner: Arc::new(image.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_creation() {
        let img = Image::new(100, 200, 1).unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 200);
        assert_eq!(img.channels(), 1);
        assert_eq!(img.depth(), PixelDepth::Bit8);
        assert_eq!(img.data().len(), 100 * 200);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Image::new(0, 10, 1).unwrap_err(),
            Error::InvalidDimension {
                width: 0,
                height: 10
            }
        );
        assert!(Image::new(10, 0, 1).is_err());
    }

    #[test]
    fn test_invalid_channels() {
        assert_eq!(Image::new(4, 4, 0).unwrap_err(), Error::InvalidChannels(0));
        assert_eq!(Image::new(4, 4, 5).unwrap_err(), Error::InvalidChannels(5));
    }

    #[test]
    fn test_from_raw_size_check() {
        let err = Image::from_raw(3, 2, 3, vec![0; 17]).unwrap_err();
        assert_eq!(
            err,
            Error::BufferSizeMismatch {
                expected: 18,
                actual: 17
            }
        );
        assert!(Image::from_raw(3, 2, 3, vec![0; 18]).is_ok());
    }

    #[test]
    fn test_depth() {
        assert_eq!(PixelDepth::from_bits(8).unwrap(), PixelDepth::Bit8);
        assert_eq!(PixelDepth::from_bits(16), Err(Error::InvalidDepth(16)));
        assert_eq!(PixelDepth::Bit8.max_value(), 255);
        assert_eq!(PixelDepth::Bit8.levels(), 256);
    }

    #[test]
    fn test_clone_shares_data() {
        let img1 = Image::new(10, 10, 1).unwrap();
        let img2 = img1.clone();
        assert_eq!(img1.ref_count(), 2);
        assert_eq!(img2.ref_count(), 2);
    }

    #[test]
    fn test_try_into_mut() {
        let img = Image::new(10, 10, 1).unwrap();
        let mut img_mut = img.try_into_mut().unwrap();
        img_mut.data_mut()[0] = 42;
        let img: Image = img_mut.into();
        assert_eq!(img.data()[0], 42);
    }

    #[test]
    fn test_try_into_mut_fails_when_shared() {
        let img1 = Image::new(10, 10, 1).unwrap();
        let _img2 = img1.clone();
        assert!(img1.try_into_mut().is_err());
    }

    #[test]
    fn test_to_mut_copies() {
        let img = Image::new_filled(2, 2, 1, 7).unwrap();
        let mut copy = img.to_mut();
        copy.data_mut()[0] = 1;
        assert_eq!(img.data()[0], 7);
        assert_eq!(copy.data()[0], 1);
    }

    #[test]
    fn test_into_raw() {
        let img = Image::from_raw(2, 1, 1, vec![3, 4]).unwrap();
        assert_eq!(img.into_raw(), vec![3, 4]);
    }
}
