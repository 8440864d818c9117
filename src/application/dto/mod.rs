pub mod archive_dto;
