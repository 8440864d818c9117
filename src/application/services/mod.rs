mod archive_codec;
pub mod archive_service;
pub mod conversion_service;
mod image_codec;

pub use archive_codec::ArchiveCodec;
pub use archive_service::{ArchiveOutcome, ArchiveService};
pub use conversion_service::{ConversionOutcome, ConversionService};
pub use image_codec::ImageCodec;
