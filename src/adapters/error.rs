use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::application::error::{ApplicationError, ParseError};

/// Body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(rename = "statusMessage")]
    pub status_message: String,
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Parse(ParseError::Malformed(_)) => StatusCode::BAD_REQUEST,
            ApplicationError::Parse(ParseError::TooLarge(_)) => StatusCode::PAYLOAD_TOO_LARGE,
            ApplicationError::Parse(ParseError::Io(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApplicationError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            ApplicationError::Validation(ref msg) => {
                warn!("Validation failed: {}", msg);
            }
            ApplicationError::Parse(ref cause) if status.is_client_error() => {
                warn!("Unparseable request: {}", cause);
            }
            ApplicationError::Parse(ref cause) => {
                error!("Failed to read request: {}", cause);
            }
            ApplicationError::Processing(ref msg) => {
                error!("Processing error: {}", msg);
            }
        }

        let body = Json(ErrorResponse {
            status_code: status.as_u16(),
            status_message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<BytesRejection> for ParseError {
    fn from(rejection: BytesRejection) -> Self {
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => ParseError::TooLarge(rejection.body_text()),
            status if status.is_client_error() => ParseError::Malformed(rejection.body_text()),
            _ => ParseError::Io(rejection.body_text()),
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(error: serde_json::Error) -> Self {
        ParseError::Malformed(format!("Invalid JSON body: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let cases = [
            (ApplicationError::validation("x"), 400),
            (ParseError::Malformed("x".into()).into(), 400),
            (ParseError::TooLarge("x".into()).into(), 413),
            (ParseError::Io("x".into()).into(), 500),
            (ApplicationError::processing("x"), 500),
        ];
        for (err, expected) in cases {
            assert_eq!(err.status_code().as_u16(), expected, "{err:?}");
        }
    }

    #[test]
    fn invalid_json_is_malformed() {
        let error = serde_json::from_slice::<serde_json::Value>(b"{\"images\": [").unwrap_err();
        let parsed = ParseError::from(error);
        assert!(matches!(parsed, ParseError::Malformed(_)), "{parsed:?}");
        assert_eq!(ApplicationError::from(parsed).status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn response_carries_status_and_message() {
        let response = ApplicationError::validation("Invalid format specified").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
