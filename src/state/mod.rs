use crate::protocol::ServerMessage;
use crate::session::{GameSession, SessionResult};
use crate::types::*;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Outcome of an applied action plus the session state it produced
#[derive(Debug, Clone, PartialEq)]
pub struct Applied<T> {
    pub value: T,
    pub session: SessionSnapshot,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<GameSession>>,
    /// Broadcast channel for sending messages to all connected clients
    pub broadcast: broadcast::Sender<ServerMessage>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let (tx, _rx) = broadcast::channel(100);
        Self {
            session: Arc::new(RwLock::new(GameSession::new(config))),
            broadcast: tx,
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.read().await.snapshot()
    }

    pub async fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.session.read().await.leaderboard()
    }

    /// Send to every connected client
    pub fn broadcast_to_all(&self, msg: ServerMessage) {
        // Ignore send errors (no receivers connected is fine)
        let _ = self.broadcast.send(msg);
    }

    fn publish(&self, session: &SessionSnapshot) {
        self.broadcast_to_all(ServerMessage::Session {
            session: session.clone(),
        });
    }

    /// Run one action against the session and broadcast the new state if it applied
    ///
    /// The returned snapshot is the one taken under the same write lock as the action.
    async fn apply<T>(
        &self,
        action: impl FnOnce(&mut GameSession) -> SessionResult<T>,
    ) -> SessionResult<Applied<T>> {
        let applied = {
            let mut session = self.session.write().await;
            action(&mut *session).map(|value| Applied {
                value,
                session: session.snapshot(),
            })
        };

        if let Ok(applied) = &applied {
            self.publish(&applied.session);
        }
        applied
    }

    pub async fn add_participant(&self, name: &str) -> SessionResult<Applied<ParticipantName>> {
        self.apply(|s| s.add_participant(name)).await
    }

    pub async fn start_game(&self) -> SessionResult<Applied<()>> {
        self.apply(|s| s.start_game()).await
    }

    pub async fn mark_found(&self, participant: &str) -> SessionResult<Applied<Award>> {
        self.apply(|s| s.mark_found(participant)).await
    }

    pub async fn next_round(&self) -> SessionResult<Applied<SessionPhase>> {
        self.apply(|s| s.next_round()).await
    }

    pub async fn end_game(&self) -> SessionResult<Applied<()>> {
        self.apply(|s| s.end_game()).await
    }

    /// Reset always applies
    pub async fn reset_game(&self) -> SessionSnapshot {
        let snapshot = {
            let mut session = self.session.write().await;
            session.reset_game();
            session.snapshot()
        };
        self.publish(&snapshot);
        snapshot
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
