/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the pixel data length does not match the declared size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidLength(usize, usize),

    /// Error when source and destination sizes do not match.
    #[error("Source size ({0}x{1}) does not match destination size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when sampling from a source with a zero extent.
    #[error("Cannot sample from a zero-sized source ({0}x{1})")]
    ZeroSourceExtent(usize, usize),

    /// Error when the gamma value is not a positive finite number.
    #[error("Gamma must be a positive finite number, got {0}")]
    InvalidGamma(f64),
}
