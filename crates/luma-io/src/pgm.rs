use std::io::Write;
use std::path::Path;

use luma_image::{GrayImage, ImageSize};

use crate::error::IoError;

/// Writes the image to the given file path as a binary PGM (P5) raster.
///
/// The header is the magic token, width, height and the maximum sample
/// value, followed by the raw row-major bytes.
///
/// # Arguments
///
/// * `file_path` - The path the raster is written to.
/// * `image` - The image to write.
pub fn write_image_pgm(file_path: impl AsRef<Path>, image: &GrayImage) -> Result<(), IoError> {
    let file = std::fs::File::create(file_path)?;
    let mut writer = std::io::BufWriter::new(file);

    write!(writer, "P5\n{} {}\n255\n", image.width(), image.height())?;
    writer.write_all(image.as_slice())?;
    writer.flush()?;

    Ok(())
}

/// Reads a binary PGM (P5) raster from the given file path.
///
/// Only 8-bit rasters (maximum sample value 255) are supported; header
/// comments are skipped.
///
/// # Arguments
///
/// * `file_path` - The path to the raster file.
///
/// # Returns
///
/// An image containing the raster pixel data.
pub fn read_image_pgm(file_path: impl AsRef<Path>) -> Result<GrayImage, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)?;
    let mut pos = 0;

    let magic = next_token(&bytes, &mut pos)
        .ok_or_else(|| IoError::InvalidPgmHeader("missing magic token".to_string()))?;
    if magic != b"P5" {
        return Err(IoError::InvalidPgmHeader(format!(
            "expected magic token P5, got {:?}",
            String::from_utf8_lossy(magic)
        )));
    }

    let width = next_usize(&bytes, &mut pos, "width")?;
    let height = next_usize(&bytes, &mut pos, "height")?;
    let max_val = next_usize(&bytes, &mut pos, "maximum sample value")?;
    if max_val != 255 {
        return Err(IoError::InvalidPgmHeader(format!(
            "unsupported maximum sample value {max_val}"
        )));
    }

    // a single whitespace byte separates the header from the payload
    if pos >= bytes.len() || !bytes[pos].is_ascii_whitespace() {
        return Err(IoError::InvalidPgmHeader(
            "missing separator before payload".to_string(),
        ));
    }
    pos += 1;

    let payload = &bytes[pos..];
    let expected = width * height;
    if payload.len() != expected {
        return Err(IoError::InvalidPayloadLength(payload.len(), expected));
    }

    Ok(GrayImage::new(ImageSize { width, height }, payload.to_vec())?)
}

fn is_pnm_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

fn next_token<'a>(bytes: &'a [u8], pos: &mut usize) -> Option<&'a [u8]> {
    // skip whitespace and comment lines
    while *pos < bytes.len() {
        let b = bytes[*pos];
        if is_pnm_space(b) {
            *pos += 1;
        } else if b == b'#' {
            while *pos < bytes.len() && bytes[*pos] != b'\n' {
                *pos += 1;
            }
        } else {
            break;
        }
    }

    let start = *pos;
    while *pos < bytes.len() && !is_pnm_space(bytes[*pos]) {
        *pos += 1;
    }

    (*pos > start).then(|| &bytes[start..*pos])
}

fn next_usize(bytes: &[u8], pos: &mut usize, what: &str) -> Result<usize, IoError> {
    let token = next_token(bytes, pos)
        .ok_or_else(|| IoError::InvalidPgmHeader(format!("missing {what}")))?;

    std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| {
            IoError::InvalidPgmHeader(format!(
                "invalid {what}: {:?}",
                String::from_utf8_lossy(token)
            ))
        })
}

#[cfg(test)]
mod tests {
    use luma_image::{GrayImage, ImageSize};

    use crate::error::IoError;
    use crate::pgm::{read_image_pgm, write_image_pgm};

    #[test]
    fn write_read_round_trip() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.pgm");

        let image = GrayImage::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![0, 64, 128, 192, 254, 255],
        )?;
        write_image_pgm(&file_path, &image)?;

        let image_back = read_image_pgm(&file_path)?;
        assert_eq!(image_back, image);

        Ok(())
    }

    #[test]
    fn write_read_empty() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("empty.pgm");

        let image = GrayImage::new(
            ImageSize {
                width: 0,
                height: 0,
            },
            vec![],
        )?;
        write_image_pgm(&file_path, &image)?;

        let image_back = read_image_pgm(&file_path)?;
        assert_eq!(image_back.size().width, 0);
        assert_eq!(image_back.size().height, 0);

        Ok(())
    }

    #[test]
    fn read_skips_comments() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("comment.pgm");
        std::fs::write(&file_path, b"P5\n# made by hand\n2 1\n255\n\x07\x0b")?;

        let image = read_image_pgm(&file_path)?;
        assert_eq!(image.as_slice(), &[7, 11]);

        Ok(())
    }

    #[test]
    fn read_rejects_wrong_magic() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("ascii.pgm");
        std::fs::write(&file_path, b"P2\n2 1\n255\n0 1\n")?;

        let res = read_image_pgm(&file_path);
        assert!(matches!(res, Err(IoError::InvalidPgmHeader(_))));

        Ok(())
    }

    #[test]
    fn read_rejects_short_payload() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("short.pgm");
        std::fs::write(&file_path, b"P5\n2 2\n255\n\x00\x01\x02")?;

        let res = read_image_pgm(&file_path);
        assert!(matches!(res, Err(IoError::InvalidPayloadLength(3, 4))));

        Ok(())
    }
}
