pub mod archive_dto;
pub mod conversion_dto;
