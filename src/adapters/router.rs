use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{
    adapters::{
        controllers::{
            archive_controller::ArchiveController, conversion_controller::ConversionController,
            health_controller::HealthController,
        },
        error::ErrorResponse,
        middleware::{make_request_span, request_id_middleware},
        state::AppState,
    },
    domain::config::server::{ConfigError, ServerConfig},
};

pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route("/api/convert", post(ConversionController::convert))
        .route("/api/download-zip", post(ArchiveController::download_zip))
        .route("/api/health", get(HealthController::health_check))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .with_state(state)
}

/// Restricts CORS to the configured origins, or allows everything when none
/// are configured (development only).
pub fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, ConfigError> {
    let Some(allowed_origins) = &config.cors_allowed_origins else {
        return Ok(CorsLayer::permissive());
    };

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "CORS_ALLOWED_ORIGINS",
                    expected: "origin",
                    value: origin.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            status_code: StatusCode::NOT_FOUND.as_u16(),
            status_message: "Not Found".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_accepts_configured_origins() {
        let config = ServerConfig {
            cors_allowed_origins: Some(vec!["https://app.example".to_string()]),
            ..ServerConfig::default()
        };
        assert!(cors_layer(&config).is_ok());
    }

    #[test]
    fn cors_rejects_unencodable_origin() {
        let config = ServerConfig {
            cors_allowed_origins: Some(vec!["bad\norigin".to_string()]),
            ..ServerConfig::default()
        };
        assert!(cors_layer(&config).is_err());
    }
}
