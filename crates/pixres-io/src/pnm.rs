//! PNM image format support
//!
//! Binary PGM (`P5`, gray) and PPM (`P6`, RGB) with 8-bit samples.
//! Header tokens may be separated by any whitespace and interleaved with
//! `#` comments.

use crate::{IoError, IoResult};
use pixres_core::Image;
use std::io::{BufRead, Read, Write};

fn read_byte<R: BufRead>(reader: &mut R) -> IoResult<Option<u8>> {
    let mut byte = [0u8; 1];
    match reader.read(&mut byte)? {
        0 => Ok(None),
        _ => Ok(Some(byte[0])),
    }
}

/// Read the next whitespace-delimited header token, skipping comments.
///
/// Consumes exactly one whitespace byte after the token, which is where the
/// raster starts after the last header field.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    loop {
        let Some(b) = read_byte(reader)? else {
            break;
        };
        if b == b'#' && token.is_empty() {
            let mut comment = Vec::new();
            reader.read_until(b'\n', &mut comment)?;
            continue;
        }
        if b.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            break;
        }
        token.push(b as char);
    }
    if token.is_empty() {
        return Err(IoError::InvalidData("truncated PNM header".to_string()));
    }
    Ok(token)
}

fn read_number<R: BufRead>(reader: &mut R, what: &str) -> IoResult<u32> {
    let token = read_token(reader)?;
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("bad PNM {what}: {token:?}")))
}

/// Read a binary PGM or PPM image.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Image> {
    let channels: usize = match read_token(&mut reader)?.as_str() {
        "P5" => 1,
        "P6" => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM variant {other} (only P5 and P6 are supported)"
            )));
        }
    };
    let width = read_number(&mut reader, "width")?;
    let height = read_number(&mut reader, "height")?;
    let maxval = read_number(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM maxval {maxval} (only 8-bit samples are supported)"
        )));
    }

    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| {
            IoError::InvalidData(format!("PNM size {width}x{height} does not fit in memory"))
        })?;

    // Buffer grows only as far as the raster bytes actually present
    let mut data = Vec::new();
    reader
        .take(len as u64)
        .read_to_end(&mut data)
        .map_err(|e| IoError::DecodeError(format!("PNM raster: {e}")))?;
    if data.len() != len {
        return Err(IoError::DecodeError(format!(
            "PNM raster: expected {len} bytes, got {}",
            data.len()
        )));
    }

    if maxval < 255 {
        for v in &mut data {
            *v = ((u32::from(*v).min(maxval) * 255 + maxval / 2) / maxval) as u8;
        }
    }

    Ok(Image::from_raw(width, height, channels as u32, data)?)
}

/// Write a binary PGM (1 channel) or PPM (3 channels) image.
pub fn write_pnm<W: Write>(image: &Image, mut writer: W) -> IoResult<()> {
    let magic = match image.channels() {
        1 => "P5",
        3 => "P6",
        n => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM cannot store {n} channels"
            )));
        }
    };
    write!(
        writer,
        "{magic}\n{} {}\n{}\n",
        image.width(),
        image.height(),
        image.depth().max_value()
    )?;
    writer.write_all(image.data())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_pnm_roundtrip_gray() {
        let img = Image::from_raw(3, 2, 1, vec![0, 50, 100, 150, 200, 255]).unwrap();
        let mut buffer = Vec::new();
        write_pnm(&img, &mut buffer).unwrap();
        assert!(buffer.starts_with(b"P5\n3 2\n255\n"));

        let img2 = read_pnm(Cursor::new(buffer)).unwrap();
        assert_eq!(img2, img);
    }

    #[test]
    fn test_pnm_header_comments() {
        let mut data = b"P6\n# made by hand\n1 1 # trailing\n255\n".to_vec();
        data.extend_from_slice(&[1, 2, 3]);
        let img = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(img.channels(), 3);
        assert_eq!(img.get_pixel(0, 0), Some(&[1u8, 2, 3][..]));
    }

    #[test]
    fn test_pnm_maxval_scaling() {
        let mut data = b"P5 2 1 15\n".to_vec();
        data.extend_from_slice(&[0, 15]);
        let img = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(img.data(), &[0, 255]);
    }

    #[test]
    fn test_pnm_rejects_ascii_and_alpha() {
        assert!(matches!(
            read_pnm(Cursor::new(b"P2\n1 1\n255\n0\n".to_vec())),
            Err(IoError::UnsupportedFormat(_))
        ));
        let rgba = Image::new(1, 1, 4).unwrap();
        assert!(write_pnm(&rgba, Vec::new()).is_err());
    }

    #[test]
    fn test_pnm_oversized_header() {
        // Header claims 40 GB, body holds a few bytes
        let mut data = b"P5 200000 200000 255\n".to_vec();
        data.extend_from_slice(&[7; 16]);
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::DecodeError(_))
        ));

        let data = b"P6 4294967295 4294967295 255\n\x00".to_vec();
        assert!(read_pnm(Cursor::new(data)).is_err());
    }

    #[test]
    fn test_pnm_zero_width() {
        let data = b"P5 0 3 255\n".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::Core(_))
        ));
    }

    #[test]
    fn test_pnm_truncated_raster() {
        let data = b"P5\n4 4\n255\n\x00\x01".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::DecodeError(_))
        ));
    }
}
