#![deny(missing_docs)]
//! Grayscale image container and error types

/// image representation for the grayscale pipeline.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{GrayImage, ImageSize};
