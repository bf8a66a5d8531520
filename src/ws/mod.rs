pub mod handlers;
pub mod host;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;

use crate::protocol::{ClientMessage, ServerMessage, PROTOCOL_VERSION};
use crate::state::AppState;
use crate::types::Role;

#[derive(Debug, Deserialize)]
pub struct WsQuery {
    pub role: Option<String>,
}

impl WsQuery {
    pub fn role(&self) -> Role {
        match self.role.as_deref() {
            Some("host") => Role::Host,
            _ => Role::Viewer,
        }
    }
}

/// WebSocket upgrade handler
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Query(params): Query<WsQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let role = params.role();
    tracing::info!("WebSocket connection request: role={:?}", role);

    ws.on_upgrade(move |socket| handle_socket(socket, role, state))
}

/// Handle individual WebSocket connection
async fn handle_socket(socket: WebSocket, role: Role, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    tracing::info!("WebSocket connected with role: {:?}", role);

    // Subscribe before the welcome snapshot so no update slips in between
    let mut broadcast_rx = state.broadcast.subscribe();

    let welcome = ServerMessage::Welcome {
        protocol: PROTOCOL_VERSION.to_string(),
        role,
        session: state.snapshot().await,
        server_now: chrono::Utc::now().to_rfc3339(),
    };

    if let Ok(msg) = serde_json::to_string(&welcome) {
        if sender.send(Message::Text(msg.into())).await.is_err() {
            tracing::error!("Failed to send welcome message");
            return;
        }
    }

    loop {
        tokio::select! {
            broadcast_msg = broadcast_rx.recv() => {
                match broadcast_msg {
                    Ok(msg) => {
                        if let Ok(json) = serde_json::to_string(&msg) {
                            if sender.send(Message::Text(json.into())).await.is_err() {
                                break;
                            }
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        // Every snapshot is complete, the next one catches us up
                        tracing::warn!("Client lagged behind by {} messages", skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }

            ws_msg = receiver.next() => {
                match ws_msg {
                    Some(Ok(Message::Text(text))) => {
                        tracing::debug!("Received message: {}", text.as_str());

                        let response = match serde_json::from_str::<ClientMessage>(&text) {
                            Ok(client_msg) => handlers::handle_message(client_msg, &role, &state).await,
                            Err(e) => {
                                tracing::error!("Failed to parse client message: {}", e);
                                Some(ServerMessage::Error {
                                    code: "PARSE_ERROR".to_string(),
                                    msg: format!("Invalid message format: {}", e),
                                })
                            }
                        };

                        if let Some(response) = response {
                            if let Ok(json) = serde_json::to_string(&response) {
                                if sender.send(Message::Text(json.into())).await.is_err() {
                                    tracing::error!("Failed to send response");
                                    break;
                                }
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) => {
                        tracing::info!("WebSocket closed");
                        break;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if sender.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("WebSocket error: {}", e);
                        break;
                    }
                    None => break,
                }
            }
        }
    }

    tracing::info!("WebSocket connection closed for role: {:?}", role);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_query() {
        let query = |role: Option<&str>| WsQuery {
            role: role.map(str::to_string),
        };
        assert_eq!(query(Some("host")).role(), Role::Host);
        assert_eq!(query(Some("viewer")).role(), Role::Viewer);
        assert_eq!(query(Some("HOST")).role(), Role::Viewer);
        assert_eq!(query(None).role(), Role::Viewer);
    }
}
