/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open or manipulate the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error when a pixel payload does not contain exactly the expected bytes.
    #[error("Payload length ({0}) does not match the expected size ({1})")]
    InvalidPayloadLength(usize, usize),

    /// Error when a PGM header is malformed.
    #[error("Invalid PGM header: {0}")]
    InvalidPgmHeader(String),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] luma_image::ImageError),

    /// Error to decode the image.
    #[error("Failed to decode the image. {0}")]
    ImageDecodeError(#[from] image::ImageError),
}
