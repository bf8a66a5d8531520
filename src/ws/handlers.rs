//! WebSocket message dispatch
//!
//! Authorization is checked here, then dispatched to the host handler module.

use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::AppState;
use crate::types::Role;
use std::sync::Arc;

use super::host;

/// Macro to check host authorization and return early if unauthorized
macro_rules! check_host {
    ($role:expr, $action:expr) => {
        if *$role != Role::Host {
            return Some(ServerMessage::Error {
                code: "UNAUTHORIZED".to_string(),
                msg: format!("Only host can {}", $action),
            });
        }
    };
}

/// Handle client messages and return optional response
pub async fn handle_message(
    msg: ClientMessage,
    role: &Role,
    state: &Arc<AppState>,
) -> Option<ServerMessage> {
    match msg {
        ClientMessage::RequestState => Some(ServerMessage::Session {
            session: state.snapshot().await,
        }),

        ClientMessage::AddParticipant { name } => {
            check_host!(role, "add participants");
            host::handle_add_participant(state, name).await
        }

        ClientMessage::StartGame => {
            check_host!(role, "start the hunt");
            host::handle_start_game(state).await
        }

        ClientMessage::MarkFound { participant } => {
            check_host!(role, "mark participants found");
            host::handle_mark_found(state, participant).await
        }

        ClientMessage::NextRound => {
            check_host!(role, "advance rounds");
            host::handle_next_round(state).await
        }

        ClientMessage::EndGame => {
            check_host!(role, "end the hunt");
            host::handle_end_game(state).await
        }

        ClientMessage::ResetGame => {
            check_host!(role, "reset game");
            host::handle_reset_game(state).await
        }
    }
}
