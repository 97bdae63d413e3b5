//! Grayscale image batch loading, enhancement and resampling.

#[doc(inline)]
pub use luma_image as image;

#[doc(inline)]
pub use luma_imgproc as imgproc;

#[doc(inline)]
pub use luma_io as io;
