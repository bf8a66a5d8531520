//! Read-only HTTP API endpoints.
//!
//! Handy for scoreboards and scripts that don't want a WebSocket.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::catalog::ITEM_CATALOG;
use crate::state::AppState;
use crate::types::{LeaderboardEntry, SessionSnapshot};

/// GET /api/state
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<SessionSnapshot> {
    Json(state.snapshot().await)
}

/// GET /api/leaderboard
pub async fn get_leaderboard(State(state): State<Arc<AppState>>) -> Json<Vec<LeaderboardEntry>> {
    Json(state.leaderboard().await)
}

/// GET /api/catalog
///
/// The full prompt catalog in its unshuffled order.
pub async fn get_catalog() -> Json<Vec<&'static str>> {
    Json(ITEM_CATALOG.to_vec())
}
