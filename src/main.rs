use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use treasurehunt::{
    app, auth,
    config::ServerConfig,
    state::AppState,
    types::GameConfig,
};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "treasurehunt=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Treasure Hunt...");

    let server_config = ServerConfig::from_env();
    let game_config = GameConfig::from_env();
    let auth_config = Arc::new(auth::AuthConfig::from_env());

    tracing::info!(
        "Game limits: {} participants, {} characters per name",
        game_config.max_participants,
        game_config.max_name_chars
    );

    let state = Arc::new(AppState::with_config(game_config));
    let app = app::build_router(state, auth_config, &server_config);

    let addr = SocketAddr::from(([0, 0, 0, 0], server_config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("Listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
