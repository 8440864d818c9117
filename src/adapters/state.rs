use axum::extract::FromRef;
use std::sync::Arc;

use crate::{
    application::services::{ArchiveCodec, ArchiveService, ConversionService, ImageCodec},
    domain::config::server::ServerConfig,
};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub conversion_service: Arc<ConversionService>,
    pub archive_service: Arc<ArchiveService>,
}

impl AppState {
    pub fn new(
        config: ServerConfig,
        image_codec: Arc<dyn ImageCodec>,
        archive_codec: Arc<dyn ArchiveCodec>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            conversion_service: Arc::new(ConversionService::new(image_codec)),
            archive_service: Arc::new(ArchiveService::new(archive_codec)),
        }
    }
}
