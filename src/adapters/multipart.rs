//! Multipart body normalization.
//!
//! Turns an axum [`Multipart`] stream into a flat list of [`Part`]s so the
//! application layer never touches the HTTP extractor.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart,
    },
    http::StatusCode,
};
use tracing::debug;

use crate::{application::error::ParseError, domain::models::part::Part};

/// Reads the whole body into memory.
///
/// Scalar fields come first, then uploaded files, each group in the order the
/// client sent them. A part is treated as a file when it carries a filename.
/// Any read error aborts the whole parse.
pub async fn read_parts(mut multipart: Multipart) -> Result<Vec<Part>, ParseError> {
    let mut fields = Vec::new();
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().map(str::to_string);
        let mime_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;

        match filename {
            Some(filename) => {
                debug!(field = %name, file = %filename, bytes = data.len(), "Read file part");
                files.push(Part::file(name, data, Some(filename), mime_type));
            }
            None => {
                debug!(field = %name, bytes = data.len(), "Read field part");
                fields.push(Part::field(name, data));
            }
        }
    }

    debug!(fields = fields.len(), files = files.len(), "Multipart body parsed");
    fields.extend(files);
    Ok(fields)
}

impl From<MultipartError> for ParseError {
    fn from(error: MultipartError) -> Self {
        classify(error.status(), error.body_text())
    }
}

impl From<MultipartRejection> for ParseError {
    fn from(rejection: MultipartRejection) -> Self {
        classify(rejection.status(), rejection.body_text())
    }
}

fn classify(status: StatusCode, message: String) -> ParseError {
    match status {
        StatusCode::PAYLOAD_TOO_LARGE => ParseError::TooLarge(message),
        status if status.is_client_error() => ParseError::Malformed(message),
        _ => ParseError::Io(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        extract::{FromRequest, Request},
    };

    const BOUNDARY: &str = "XBOUNDARYX";

    fn multipart_request(body: String) -> Request {
        Request::builder()
            .method("POST")
            .uri("/api/convert")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn text_section(name: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
    }

    fn file_section(name: &str, filename: &str, mime: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {mime}\r\n\r\n{value}\r\n"
        )
    }

    async fn parse(body: String) -> Result<Vec<Part>, ParseError> {
        let multipart = Multipart::from_request(multipart_request(body), &())
            .await
            .map_err(ParseError::from)?;
        read_parts(multipart).await
    }

    #[tokio::test]
    async fn fields_precede_files_in_encounter_order() {
        let body = [
            file_section("file0", "a.png", "image/png", "AAA"),
            text_section("format", "webp"),
            file_section("file1", "b.jpg", "image/jpeg", "BB"),
            text_section("count", "2"),
            text_section("tag", "one"),
            text_section("tag", "two"),
        ]
        .concat()
            + &format!("--{BOUNDARY}--\r\n");

        let parts = parse(body).await.unwrap();
        let names: Vec<_> = parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["format", "count", "tag", "tag", "file0", "file1"]);

        assert_eq!(parts[0].text(), "webp");
        assert!(parts[0].filename.is_none() && parts[0].mime_type.is_none());
        assert_eq!(parts[3].text(), "two");

        assert_eq!(parts[4].filename.as_deref(), Some("a.png"));
        assert_eq!(parts[4].mime_type.as_deref(), Some("image/png"));
        assert_eq!(parts[4].data.as_ref(), b"AAA");
        assert_eq!(parts[5].filename.as_deref(), Some("b.jpg"));
        assert_eq!(parts[5].mime_type.as_deref(), Some("image/jpeg"));
    }

    #[tokio::test]
    async fn empty_body_yields_no_parts() {
        let parts = parse(format!("--{BOUNDARY}--\r\n")).await.unwrap();
        assert!(parts.is_empty());
    }

    #[tokio::test]
    async fn truncated_body_is_a_parse_error() {
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"format\"\r\n\r\npng"
        );
        let err = parse(body).await.unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)), "{err:?}");
    }

    #[tokio::test]
    async fn missing_boundary_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let rejection = Multipart::from_request(request, &()).await.unwrap_err();
        assert!(matches!(
            ParseError::from(rejection),
            ParseError::Malformed(_)
        ));
    }
}
