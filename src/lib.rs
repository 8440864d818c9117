//! HTTP service that converts uploaded images between formats and packs
//! converted results into ZIP archives.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod services;

pub use adapters::{router::build_router, state::AppState};
