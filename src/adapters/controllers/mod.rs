pub mod archive_controller;
pub mod conversion_controller;
pub mod health_controller;
