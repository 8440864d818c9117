use std::io::{Cursor, Write};

use async_trait::async_trait;
use zip::{write::FileOptions, CompressionMethod, ZipWriter};

use crate::{
    application::{error::ApplicationError, services::ArchiveCodec},
    domain::models::archive::ArchiveEntry,
    services::error::CodecError,
};

pub const DEFAULT_COMPRESSION_LEVEL: i32 = 6;

/// In-memory ZIP writer using DEFLATE.
#[derive(Debug, Clone)]
pub struct ZipArchiveCodec {
    compression_level: i32,
}

impl Default for ZipArchiveCodec {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl ZipArchiveCodec {
    pub fn new(compression_level: i32) -> Self {
        Self { compression_level }
    }

    pub fn pack_blocking(&self, entries: Vec<ArchiveEntry>) -> Result<Vec<u8>, CodecError> {
        let mut buffer = Vec::new();
        {
            let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
            let options = FileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .compression_level(Some(self.compression_level))
                .unix_permissions(0o644);

            for entry in entries {
                zip.start_file(entry.filename.as_str(), options)?;
                zip.write_all(&entry.content)?;
            }

            zip.finish()?;
        }

        Ok(buffer)
    }
}

#[async_trait]
impl ArchiveCodec for ZipArchiveCodec {
    async fn pack(&self, entries: Vec<ArchiveEntry>) -> Result<Vec<u8>, ApplicationError> {
        let codec = self.clone();
        let archive = tokio::task::spawn_blocking(move || codec.pack_blocking(entries))
            .await
            .map_err(CodecError::from)??;
        Ok(archive)
    }
}
