use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::info;

use crate::{
    adapters::{dto::conversion_dto::ConvertResponse, multipart::read_parts},
    application::{
        error::{ApplicationError, ParseError},
        services::ConversionService,
    },
};

pub struct ConversionController;

impl ConversionController {
    /// Converts uploaded images to one target format
    /// POST /api/convert
    /// Form: format=jpg|png|webp|gif, count=<n>, file*=<binary>...
    pub async fn convert(
        State(conversion_service): State<Arc<ConversionService>>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Json<ConvertResponse>, ApplicationError> {
        let multipart = multipart.map_err(ParseError::from)?;
        let parts = read_parts(multipart).await?;
        info!("Form data received: {} parts", parts.len());

        let outcome = conversion_service.convert(parts).await?;
        Ok(Json(ConvertResponse::from(outcome)))
    }
}
