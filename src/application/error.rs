use thiserror::Error;

/// Every failure a request can end with. The adapters layer owns the mapping
/// to HTTP status codes.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Client input is missing or out of range.
    #[error("{0}")]
    Validation(String),

    /// The request body could not be decoded.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A codec or the archive writer failed.
    #[error("{0}")]
    Processing(String),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid request body: {0}")]
    Malformed(String),

    #[error("Request body too large: {0}")]
    TooLarge(String),

    #[error("Failed to read request body: {0}")]
    Io(String),
}

impl ApplicationError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApplicationError::Validation(message.into())
    }

    pub fn processing(message: impl Into<String>) -> Self {
        ApplicationError::Processing(message.into())
    }
}
