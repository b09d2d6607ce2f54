//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Supports 8-bit grayscale and RGB; RGBA input is written
//! without its alpha channel.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use pixres_core::Image;
use std::io::{Read, Write};

/// Quality used by [`write_jpeg`].
pub const DEFAULT_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
///
/// # Returns
/// A 1-channel (grayscale) or 3-channel (RGB) image.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let channels = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::RGB24 => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "JPEG pixel format {:?}",
                other
            )));
        }
    };

    Ok(Image::from_raw(
        u32::from(info.width),
        u32::from(info.height),
        channels,
        data,
    )?)
}

/// Write a JPEG image at [`DEFAULT_QUALITY`].
pub fn write_jpeg<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    write_jpeg_with_quality(image, writer, DEFAULT_QUALITY)
}

/// Write a JPEG image at the given quality (1-100).
pub fn write_jpeg_with_quality<W: Write>(image: &Image, writer: W, quality: u8) -> IoResult<()> {
    let color_type = match image.channels() {
        1 => ColorType::Luma,
        3 => ColorType::Rgb,
        4 => ColorType::Rgba,
        n => {
            return Err(IoError::UnsupportedFormat(format!(
                "JPEG cannot store {n} channels"
            )));
        }
    };
    let too_large = || {
        IoError::UnsupportedFormat(format!(
            "JPEG dimensions limited to 65535, got {}x{}",
            image.width(),
            image.height()
        ))
    };
    let width = u16::try_from(image.width()).map_err(|_| too_large())?;
    let height = u16::try_from(image.height()).map_err(|_| too_large())?;

    let encoder = Encoder::new(writer, quality.clamp(1, 100));
    encoder
        .encode(image.data(), width, height, color_type)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_jpeg_roundtrip_uniform_gray() {
        // A flat image survives lossy compression almost exactly
        let img = Image::new_filled(16, 16, 1, 128).unwrap();
        let mut buffer = Vec::new();
        write_jpeg(&img, &mut buffer).unwrap();

        let img2 = read_jpeg(Cursor::new(buffer)).unwrap();
        assert_eq!(img2.dimensions(), (16, 16));
        assert_eq!(img2.channels(), 1);
        let diff = img.diff(&img2).unwrap();
        assert!(diff.max_abs_diff <= 2, "max diff {}", diff.max_abs_diff);
    }

    #[test]
    fn test_jpeg_rejects_gray_alpha() {
        let img = Image::new(4, 4, 2).unwrap();
        assert!(matches!(
            write_jpeg(&img, Vec::new()),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
