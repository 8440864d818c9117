//! Test helpers: build the router with real codecs behind an in-process
//! `TestServer`.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::TestServer;
use imgconv_service::{build_router, domain::config::server::ServerConfig, services, AppState};
use tower_http::cors::CorsLayer;

pub fn setup_test_app() -> TestServer {
    setup_test_app_with(ServerConfig::default())
}

pub fn setup_test_app_with(config: ServerConfig) -> TestServer {
    let state = AppState::new(
        config,
        services::create_image_codec(),
        services::create_archive_codec(),
    );
    let router = build_router(state, CorsLayer::permissive());
    TestServer::new(router).expect("Failed to create test server")
}
