//! PNG image format support
//!
//! Decoding normalizes every PNG variant (palette, low bit depth, 16-bit) to
//! 8-bit gray, gray+alpha, RGB or RGBA samples.

use crate::{IoError, IoResult};
use pixres_core::Image;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "PNG bit depth {:?} after normalization",
            output_info.bit_depth
        )));
    }
    let channels = match output_info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type: {:?}",
                other
            )));
        }
    };

    let width = output_info.width;
    let height = output_info.height;
    let row_len = width as usize * channels as usize;
    let mut data = Vec::with_capacity(row_len * height as usize);
    for row in buf[..output_info.buffer_size()]
        .chunks(output_info.line_size)
        .take(height as usize)
    {
        data.extend_from_slice(&row[..row_len]);
    }

    Ok(Image::from_raw(width, height, channels, data)?)
}

/// Write a PNG image
pub fn write_png<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    let color_type = match image.channels() {
        1 => ColorType::Grayscale,
        2 => ColorType::GrayscaleAlpha,
        3 => ColorType::Rgb,
        4 => ColorType::Rgba,
        n => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNG cannot store {n} channels"
            )));
        }
    };

    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(image.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
