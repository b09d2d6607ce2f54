//! pixres-io - Image I/O for pixres
//!
//! Decodes image files into [`Image`] and encodes them back:
//!
//! | Format | Read | Write | Feature |
//! |---|---|---|---|
//! | PNG | gray, gray+alpha, RGB, RGBA (any bit depth, normalized to 8) | same | `png-format` |
//! | JPEG | gray, RGB | gray, RGB, RGBA (alpha dropped) | `jpeg` |
//! | PNM | binary P5 / P6 | P5 / P6 | `pnm` |
//!
//! The core crates never depend on this one; it is the file collaborator
//! used by the batch driver.

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use log::debug;
use pixres_core::Image;
use std::fs::{self, File};
use std::io::{BufReader, Cursor, Write};
use std::path::Path;

/// Read an image from a file, detecting the format from its header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = File::open(path)?;
    let image = read_image_format(BufReader::new(file), format)?;
    debug!(
        "read {}: {}x{} c={} ({:?})",
        path.display(),
        image.width(),
        image.height(),
        image.channels(),
        format
    );
    Ok(image)
}

/// Read an image from an in-memory encoded buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Image> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

fn read_image_format<R>(reader: R, format: ImageFormat) -> IoResult<Image>
where
    R: std::io::BufRead + std::io::Seek,
{
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        other => {
            let _ = reader;
            Err(IoError::UnsupportedFormat(format!(
                "{other:?} support not enabled"
            )))
        }
    }
}

/// Encode an image into a writer.
pub fn write_image_to<W: Write>(image: &Image, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(image, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(image, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(image, writer),
        #[allow(unreachable_patterns)]
        other => {
            let _ = writer;
            Err(IoError::UnsupportedFormat(format!(
                "{other:?} support not enabled"
            )))
        }
    }
}

/// Write an image to a file in the given format.
///
/// The image is encoded before the file is created, so an image the format
/// cannot store leaves nothing on disk.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let encoded = write_image_mem(image, format)?;
    fs::write(path, encoded)?;
    debug!(
        "wrote {}: {}x{} c={} ({:?})",
        path.display(),
        image.width(),
        image.height(),
        image.channels(),
        format
    );
    Ok(())
}

/// Write an image to a file, choosing the format from the extension.
pub fn write_image_auto<P: AsRef<Path>>(image: &Image, path: P) -> IoResult<()> {
    let format = ImageFormat::from_path(path.as_ref())?;
    write_image(image, path, format)
}

/// Encode an image into a byte vector.
pub fn write_image_mem(image: &Image, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(image, &mut buffer, format)?;
    Ok(buffer)
}
