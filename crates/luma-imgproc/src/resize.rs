use luma_image::{GrayImage, ImageError};

use crate::interpolation::coord::map_coord;
use crate::interpolation::{interpolate_pixel, InterpolationMode};
use crate::parallel;

/// Resize an image to a new size.
///
/// The function resizes an image to the size of the destination buffer using
/// the specified interpolation mode. Destination pixel centers are mapped to
/// fractional source coordinates independently per axis; samples outside the
/// source replicate the nearest edge sample.
///
/// A destination with a zero extent is a valid empty result and returns
/// without touching the source.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// Returns an error if the source has a zero extent while the destination
/// does not; there is nothing to sample from.
///
/// # Example
///
/// ```
/// use luma_image::{GrayImage, ImageSize};
/// use luma_imgproc::interpolation::InterpolationMode;
/// use luma_imgproc::resize::resize;
///
/// let image = GrayImage::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = GrayImage::from_size_val(new_size, 0).unwrap();
///
/// resize(&image, &mut image_resized, InterpolationMode::Nearest).unwrap();
///
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize(
    src: &GrayImage,
    dst: &mut GrayImage,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if dst.as_slice().is_empty() {
        return Ok(());
    }

    if src.width() == 0 || src.height() == 0 {
        return Err(ImageError::ZeroSourceExtent(src.width(), src.height()));
    }

    // the mapping is separable; compute the x coordinates once per call
    let (src_w, dst_w) = (src.width(), dst.width());
    let us: Vec<f64> = (0..dst_w).map(|x| map_coord(x, src_w, dst_w)).collect();

    let (src_h, dst_h) = (src.height(), dst.height());
    parallel::par_iter_rows_indexed(dst, |row, dst_chunk| {
        let v = map_coord(row, src_h, dst_h);
        for (col, out) in dst_chunk.iter_mut().enumerate() {
            *out = interpolate_pixel(src, us[col], v, interpolation);
        }
    });

    Ok(())
}
