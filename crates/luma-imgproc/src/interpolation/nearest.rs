use luma_image::GrayImage;

use super::coord::nearest_index;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The sample whose center is closest to `(u, v)`, with edge samples
/// replicated for coordinates outside the source extent.
pub(crate) fn nearest_sample(image: &GrayImage, u: f64, v: f64) -> u8 {
    let iu = nearest_index(u, image.cols());
    let iv = nearest_index(v, image.rows());

    image.as_slice()[iv * image.cols() + iu]
}
