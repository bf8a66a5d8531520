//! Host-only command handlers
//!
//! All handlers in this module require the Host role.
//! Authorization is checked in the main dispatch layer before calling these.

use crate::protocol::ServerMessage;
use crate::session::SessionError;
use crate::state::{AppState, Applied};
use std::sync::Arc;

/// Rejections are routine UI noise: log quietly and tell only the requester
fn ignored(action: &str, e: SessionError) -> Option<ServerMessage> {
    tracing::debug!("Ignoring {}: {}", action, e);
    Some(ServerMessage::Ignored {
        code: e.code().to_string(),
        msg: e.to_string(),
    })
}

pub async fn handle_add_participant(state: &Arc<AppState>, name: String) -> Option<ServerMessage> {
    match state.add_participant(&name).await {
        Ok(Applied { value: name, session }) => {
            tracing::info!("Host added participant {}", name);
            Some(ServerMessage::Session { session })
        }
        Err(e) => ignored("add participant", e),
    }
}

pub async fn handle_start_game(state: &Arc<AppState>) -> Option<ServerMessage> {
    match state.start_game().await {
        Ok(Applied { session, .. }) => {
            tracing::info!(
                "Hunt started with {} participants, first item: {:?}",
                session.participants.len(),
                session.current_item
            );
            Some(ServerMessage::Session { session })
        }
        Err(e) => ignored("start game", e),
    }
}

pub async fn handle_mark_found(
    state: &Arc<AppState>,
    participant: String,
) -> Option<ServerMessage> {
    match state.mark_found(&participant).await {
        Ok(Applied { value: award, .. }) => {
            tracing::info!(
                "{} found it in place {} for {} points",
                award.participant,
                award.place,
                award.points
            );
            if award.round_complete {
                tracing::info!("Round complete");
            }
            Some(ServerMessage::Found { award })
        }
        Err(e) => ignored("mark found", e),
    }
}

pub async fn handle_next_round(state: &Arc<AppState>) -> Option<ServerMessage> {
    match state.next_round().await {
        Ok(Applied { value: phase, session }) => {
            tracing::info!("Advanced round, now {:?}", phase);
            Some(ServerMessage::Session { session })
        }
        Err(e) => ignored("next round", e),
    }
}

pub async fn handle_end_game(state: &Arc<AppState>) -> Option<ServerMessage> {
    match state.end_game().await {
        Ok(Applied { session, .. }) => {
            tracing::info!("Hunt ended by host");
            Some(ServerMessage::Session { session })
        }
        Err(e) => ignored("end game", e),
    }
}

pub async fn handle_reset_game(state: &Arc<AppState>) -> Option<ServerMessage> {
    tracing::info!("Host resetting game");
    let session = state.reset_game().await;
    Some(ServerMessage::Session { session })
}
