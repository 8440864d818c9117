use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Cannot decode image: {0}")]
    Decode(String),

    #[error("Cannot encode image: {0}")]
    Encode(String),

    #[error("Image too large for {format}: {width}x{height}")]
    Dimensions {
        format: &'static str,
        width: u32,
        height: u32,
    },

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Codec task failed: {0}")]
    Task(String),
}

impl From<CodecError> for ApplicationError {
    fn from(error: CodecError) -> Self {
        ApplicationError::Processing(error.to_string())
    }
}

// Decoding errors are mapped explicitly at the load site.
impl From<image::ImageError> for CodecError {
    fn from(error: image::ImageError) -> Self {
        CodecError::Encode(error.to_string())
    }
}

impl From<zip::result::ZipError> for CodecError {
    fn from(error: zip::result::ZipError) -> Self {
        CodecError::Archive(error.to_string())
    }
}

impl From<std::io::Error> for CodecError {
    fn from(error: std::io::Error) -> Self {
        CodecError::Archive(error.to_string())
    }
}

impl From<tokio::task::JoinError> for CodecError {
    fn from(error: tokio::task::JoinError) -> Self {
        CodecError::Task(error.to_string())
    }
}
