use std::path::Path;

use luma_image::{GrayImage, ImageSize};

use crate::error::IoError;

/// Reads a headerless raw grayscale dump from the given file path.
///
/// The stream carries no metadata; the resolution must be known externally
/// and the file must contain exactly `size.width * size.height` bytes of
/// row-major samples.
///
/// # Arguments
///
/// * `file_path` - The path to the raw dump.
/// * `size` - The externally-known resolution of the dump.
///
/// # Returns
///
/// An image containing the raw pixel data.
pub fn read_image_raw(file_path: impl AsRef<Path>, size: ImageSize) -> Result<GrayImage, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let data = std::fs::read(file_path)?;

    let expected = size.width * size.height;
    if data.len() != expected {
        return Err(IoError::InvalidPayloadLength(data.len(), expected));
    }

    Ok(GrayImage::new(size, data)?)
}

#[cfg(test)]
mod tests {
    use luma_image::ImageSize;

    use crate::error::IoError;
    use crate::raw::read_image_raw;

    #[test]
    fn read_raw() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("dump.raw");
        std::fs::write(&file_path, (0u8..12).collect::<Vec<_>>())?;

        let image = read_image_raw(
            &file_path,
            ImageSize {
                width: 4,
                height: 3,
            },
        )?;
        assert_eq!(image.size().width, 4);
        assert_eq!(image.size().height, 3);
        assert_eq!(image.get_pixel(3, 2), Some(11));

        Ok(())
    }

    #[test]
    fn read_raw_length_mismatch() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("short.raw");
        std::fs::write(&file_path, vec![0u8; 10])?;

        let size = ImageSize {
            width: 4,
            height: 3,
        };
        let res = read_image_raw(&file_path, size);
        assert!(matches!(res, Err(IoError::InvalidPayloadLength(10, 12))));

        Ok(())
    }

    #[test]
    fn read_raw_missing_file() {
        let res = read_image_raw(
            "does/not/exist.raw",
            ImageSize {
                width: 2,
                height: 2,
            },
        );
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }
}
