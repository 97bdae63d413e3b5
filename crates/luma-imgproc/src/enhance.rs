use luma_image::{GrayImage, ImageError};

use crate::parallel;

/// Invert the intensities of an image.
///
/// dst(x,y) = 255 - src(x,y)
///
/// Applying the transform twice restores the input exactly.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image to store the result.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
pub fn invert(src: &GrayImage, dst: &mut GrayImage) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    parallel::par_iter_rows_val(src, dst, |&src_pixel, dst_pixel| {
        *dst_pixel = 255 - src_pixel;
    });

    Ok(())
}

/// Compress the dynamic range of an image logarithmically.
///
/// dst(x,y) = c * ln(1 + src(x,y)), with c = 255 / ln(256)
///
/// The constant maps 0 to 0 and 255 to 255; the result is truncated toward
/// zero, not rounded.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image to store the result.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
pub fn log_compress(src: &GrayImage, dst: &mut GrayImage) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let c = 255.0 / 256f64.ln();

    parallel::par_iter_rows_val(src, dst, |&src_pixel, dst_pixel| {
        *dst_pixel = (c * (1.0 + src_pixel as f64).ln()) as u8;
    });

    Ok(())
}

/// Apply a gamma correction to an image.
///
/// dst(x,y) = 255 * (src(x,y) / 255)^gamma
///
/// The result is truncated toward zero. A gamma of 1.0 is an exact identity;
/// values below 1.0 brighten the image, values above darken it.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `gamma` - The exponent, must be finite and > 0.
/// * `dst` - The output image to store the result.
///
/// # Errors
///
/// Returns an error if `gamma` is not a positive finite number, or if the
/// sizes of `src` and `dst` do not match.
pub fn gamma_correct(src: &GrayImage, gamma: f64, dst: &mut GrayImage) -> Result<(), ImageError> {
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(ImageError::InvalidGamma(gamma));
    }

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    parallel::par_iter_rows_val(src, dst, |&src_pixel, dst_pixel| {
        *dst_pixel = (255.0 * (src_pixel as f64 / 255.0).powf(gamma)) as u8;
    });

    Ok(())
}
