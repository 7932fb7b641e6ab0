use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Upload validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Image decode failed: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Image encode failed: {source} {location}")]
    Encode {
        #[source]
        source: image::ImageError,
        location: ErrorLocation,
    },

    #[error("IO error writing {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl MediaError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        MediaError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, MediaError>;
