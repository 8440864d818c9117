use imgconv_service::{
    adapters::router::{build_router, cors_layer},
    domain::config::server::ServerConfig,
    services, AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Initialize tracing, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env().expect("ERROR: Invalid server configuration");
    let cors = cors_layer(&config).expect("ERROR: Invalid CORS configuration");
    let addr = config.socket_addr();

    tracing::info!(
        max_body_bytes = config.max_body_bytes,
        cors_restricted = config.cors_allowed_origins.is_some(),
        "Starting imgconv-service"
    );

    let app_state = AppState::new(
        config,
        services::create_image_codec(),
        services::create_archive_codec(),
    );
    let router = build_router(app_state, cors);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
