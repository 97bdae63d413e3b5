use luma_image::GrayImage;

use super::coord::clamp_axis;

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The blend of the four samples surrounding `(u, v)`, rounded half away
/// from zero. The weights form a convex combination, so the result stays in
/// the sample range.
pub(crate) fn bilinear_sample(image: &GrayImage, u: f64, v: f64) -> u8 {
    let sx = clamp_axis(u, image.cols());
    let sy = clamp_axis(v, image.rows());

    let cols = image.cols();
    let data = image.as_slice();

    let p00 = data[sy.lo * cols + sx.lo] as f64;
    let p10 = data[sy.lo * cols + sx.hi] as f64;
    let p01 = data[sy.hi * cols + sx.lo] as f64;
    let p11 = data[sy.hi * cols + sx.hi] as f64;

    let (dx, dy) = (sx.frac, sy.frac);
    let value = p00 * (1.0 - dx) * (1.0 - dy)
        + p10 * dx * (1.0 - dy)
        + p01 * (1.0 - dx) * dy
        + p11 * dx * dy;

    value.round() as u8
}
