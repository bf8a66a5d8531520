use crate::types::*;
use serde::{Deserialize, Serialize};

pub const PROTOCOL_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Ask for a fresh snapshot (any role)
    RequestState,
    // Host-only messages
    AddParticipant {
        name: String,
    },
    StartGame,
    MarkFound {
        participant: ParticipantName,
    },
    NextRound,
    EndGame,
    ResetGame,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ServerMessage {
    Welcome {
        protocol: String,
        role: Role,
        session: SessionSnapshot,
        server_now: String,
    },
    /// Full session state, broadcast after every applied action
    Session {
        session: SessionSnapshot,
    },
    /// Sent to the host after a participant was marked found
    Found {
        award: Award,
    },
    /// The action was valid JSON but the session did not apply it
    Ignored {
        code: String,
        msg: String,
    },
    Error {
        code: String,
        msg: String,
    },
}
