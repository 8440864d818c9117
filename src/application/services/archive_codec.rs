use async_trait::async_trait;

use crate::{application::error::ApplicationError, domain::models::archive::ArchiveEntry};

#[async_trait]
pub trait ArchiveCodec: Send + Sync {
    /// Writes `entries` in order into a single compressed archive.
    async fn pack(&self, entries: Vec<ArchiveEntry>) -> Result<Vec<u8>, ApplicationError>;
}
