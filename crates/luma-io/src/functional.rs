use std::path::Path;

use luma_image::{GrayImage, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path and flattens it to grayscale.
///
/// The method tries to read any image format supported by the image crate
/// and converts the decoded pixels to single-channel 8-bit intensity. The
/// format is guessed from the file content, not the extension.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the grayscale pixel data.
pub fn read_image_gray_any(file_path: impl AsRef<Path>) -> Result<GrayImage, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // open the file and map it to memory
    let file = std::fs::File::open(file_path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    // decode the data directly from memory
    let img = image::ImageReader::new(std::io::Cursor::new(&mmap))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(GrayImage::new(size, img.into_luma8().into_raw())?)
}
