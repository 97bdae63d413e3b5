use rayon::prelude::*;

use luma_image::GrayImage;

/// Apply a function to each pixel in the image in parallel.
///
/// Rows are processed in parallel; within a row pixels are visited in order.
/// The source and destination must have the same dimensions.
pub fn par_iter_rows_val(
    src: &GrayImage,
    dst: &mut GrayImage,
    f: impl Fn(&u8, &mut u8) + Send + Sync,
) {
    let cols = src.cols();
    if cols == 0 {
        return;
    }

    src.as_slice()
        .par_chunks_exact(cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .iter()
                .zip(dst_chunk.iter_mut())
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Fill each destination row in parallel with a row-indexed producer.
///
/// Each worker owns a disjoint row range and there is no shared mutable
/// state, so the output is identical regardless of thread count.
pub fn par_iter_rows_indexed(dst: &mut GrayImage, f: impl Fn(usize, &mut [u8]) + Send + Sync) {
    let cols = dst.cols();
    if cols == 0 {
        return;
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(row, dst_chunk)| {
            f(row, dst_chunk);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use luma_image::{ImageError, ImageSize};

    #[test]
    fn iter_rows_val() -> Result<(), ImageError> {
        let src = GrayImage::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1, 2, 3, 4],
        )?;
        let mut dst = GrayImage::from_size_val(src.size(), 0)?;

        par_iter_rows_val(&src, &mut dst, |&s, d| *d = s * 2);
        assert_eq!(dst.as_slice(), &[2, 4, 6, 8]);

        Ok(())
    }

    #[test]
    fn iter_rows_val_empty() -> Result<(), ImageError> {
        let src = GrayImage::new(
            ImageSize {
                width: 0,
                height: 3,
            },
            vec![],
        )?;
        let mut dst = GrayImage::from_size_val(src.size(), 0)?;

        par_iter_rows_val(&src, &mut dst, |&s, d| *d = s);
        assert!(dst.as_slice().is_empty());

        Ok(())
    }

    #[test]
    fn iter_rows_indexed() -> Result<(), ImageError> {
        let mut dst = GrayImage::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0,
        )?;

        par_iter_rows_indexed(&mut dst, |row, chunk| {
            for (col, out) in chunk.iter_mut().enumerate() {
                *out = (row * 3 + col) as u8;
            }
        });
        assert_eq!(dst.as_slice(), &[0, 1, 2, 3, 4, 5]);

        Ok(())
    }
}
