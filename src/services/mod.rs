mod error;
mod raster_codec;
mod zip_archive;

pub use error::CodecError;
pub use raster_codec::RasterImageCodec;
pub use zip_archive::{ZipArchiveCodec, DEFAULT_COMPRESSION_LEVEL};

use std::sync::Arc;

use crate::application::services::{ArchiveCodec, ImageCodec};

pub fn create_image_codec() -> Arc<dyn ImageCodec> {
    Arc::new(RasterImageCodec::new())
}

pub fn create_archive_codec() -> Arc<dyn ArchiveCodec> {
    Arc::new(ZipArchiveCodec::new(DEFAULT_COMPRESSION_LEVEL))
}
