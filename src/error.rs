//! Custom error types for iconkit.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the iconkit library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to decode an input image file.
    #[error("failed to decode image from {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode an output image file.
    #[error("failed to encode image to {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An operation that needs at least one pixel was given none.
    #[error("image contains no pixels")]
    EmptyImage,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for iconkit operations.
pub type Result<T> = std::result::Result<T, Error>;
