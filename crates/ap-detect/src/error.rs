use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Model weights not found at {path} {location}")]
    ModelNotFound {
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("Failed to load model from {path}: {message} {location}")]
    ModelLoad {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Inference failed: {message} {location}")]
    Inference {
        message: String,
        location: ErrorLocation,
    },

    #[error("Frame source error: {message} {location}")]
    FrameSource {
        message: String,
        location: ErrorLocation,
    },

    #[error("Frame sink error: {message} {location}")]
    FrameSink {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to read font {path}: {source} {location}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Invalid font data in {path} {location}")]
    InvalidFont {
        path: PathBuf,
        location: ErrorLocation,
    },
}

impl DetectError {
    #[track_caller]
    pub fn inference<S: Into<String>>(message: S) -> Self {
        Self::Inference {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn frame_source<S: Into<String>>(message: S) -> Self {
        Self::FrameSource {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn frame_sink<S: Into<String>>(message: S) -> Self {
        Self::FrameSink {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn model_load<S: Into<String>>(path: PathBuf, message: S) -> Self {
        Self::ModelLoad {
            path,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type DetectResult<T> = std::result::Result<T, DetectError>;
