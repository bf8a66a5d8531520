use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{api, auth, config::ServerConfig, state::AppState, ws};

/// Assemble all routes around one shared game state
pub fn build_router(
    state: Arc<AppState>,
    auth_config: Arc<auth::AuthConfig>,
    server_config: &ServerConfig,
) -> Router {
    let static_dir = &server_config.static_dir;

    // Protected host page (with HTTP Basic Auth)
    let host_routes = Router::new()
        .route_service("/host", ServeFile::new(static_dir.join("host.html")))
        .layer(middleware::from_fn_with_state(
            auth_config.clone(),
            auth::host_auth_middleware,
        ));

    // WebSocket route, host role guarded by the same credentials
    let ws_routes = Router::new()
        .route("/ws", get(ws::ws_handler))
        .layer(middleware::from_fn_with_state(
            auth_config,
            auth::host_ws_auth_middleware,
        ));

    let api_routes = Router::new()
        .route("/api/state", get(api::get_state))
        .route("/api/leaderboard", get(api::get_leaderboard))
        .route("/api/catalog", get(api::get_catalog));

    Router::new()
        .merge(ws_routes)
        .merge(host_routes)
        .merge(api_routes)
        .route("/host.html", get(auth::redirect_host_html))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
