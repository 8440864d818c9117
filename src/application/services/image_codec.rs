use async_trait::async_trait;
use bytes::Bytes;

use crate::{application::error::ApplicationError, domain::models::image::TargetFormat};

#[async_trait]
pub trait ImageCodec: Send + Sync {
    /// Decodes `input` in whatever format it is in and re-encodes it as
    /// `format`.
    async fn transcode(&self, input: Bytes, format: TargetFormat)
        -> Result<Vec<u8>, ApplicationError>;
}
