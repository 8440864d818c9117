use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use tracing::info;

use crate::{
    adapters::dto::archive_dto::ArchiveResponse,
    application::{
        dto::archive_dto::ArchiveRequestDTO,
        error::{ApplicationError, ParseError},
        services::ArchiveService,
    },
};

pub struct ArchiveController;

impl ArchiveController {
    /// Packs previously converted images into a ZIP archive
    /// POST /api/download-zip
    /// Body: {"images": [{"filename": "a.png", "data": "<base64>"}]}
    ///
    /// The body is parsed as JSON whatever its content type.
    pub async fn download_zip(
        State(archive_service): State<Arc<ArchiveService>>,
        payload: Result<Bytes, BytesRejection>,
    ) -> Result<Json<ArchiveResponse>, ApplicationError> {
        let raw = payload.map_err(ParseError::from)?;
        let body: ArchiveRequestDTO = serde_json::from_slice(&raw).map_err(ParseError::from)?;
        info!(
            "Archive request received, images count: {}",
            body.images.as_ref().map_or(0, Vec::len)
        );

        let outcome = archive_service.create(body.images).await?;
        Ok(Json(ArchiveResponse::from(outcome)))
    }
}
