use luma_image::GrayImage;

use super::bilinear::bilinear_sample;
use super::nearest::nearest_sample;

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated pixel value.
pub fn interpolate_pixel(
    image: &GrayImage,
    u: f64,
    v: f64,
    interpolation: InterpolationMode,
) -> u8 {
    match interpolation {
        InterpolationMode::Bilinear => bilinear_sample(image, u, v),
        InterpolationMode::Nearest => nearest_sample(image, u, v),
    }
}
