//! Game session controller
//!
//! Holds the roster, score table and round progress of one treasure hunt and
//! exposes the host actions as synchronous state transitions. Every rejected
//! action leaves the session untouched and reports why through [`SessionError`],
//! which callers are free to ignore.

mod roster;
mod round;
mod score;

use crate::types::*;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Participant name is empty")]
    EmptyName,
    #[error("Participant name is longer than {max} characters")]
    NameTooLong { max: usize },
    #[error("{0} is already on the roster")]
    DuplicateParticipant(ParticipantName),
    #[error("Roster is full ({max} participants)")]
    RosterFull { max: usize },
    #[error("Need at least {required} participants to start, have {actual}")]
    NotEnoughParticipants { required: usize, actual: usize },
    #[error("{0} is not on the roster")]
    UnknownParticipant(ParticipantName),
    #[error("{0} was already found this round")]
    AlreadyFound(ParticipantName),
    #[error("Cannot {action:?} during {phase:?}")]
    WrongPhase {
        action: SessionAction,
        phase: SessionPhase,
    },
}

impl SessionError {
    /// Stable machine-readable code for the wire
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::EmptyName => "EMPTY_NAME",
            SessionError::NameTooLong { .. } => "NAME_TOO_LONG",
            SessionError::DuplicateParticipant(_) => "DUPLICATE_PARTICIPANT",
            SessionError::RosterFull { .. } => "ROSTER_FULL",
            SessionError::NotEnoughParticipants { .. } => "NOT_ENOUGH_PARTICIPANTS",
            SessionError::UnknownParticipant(_) => "UNKNOWN_PARTICIPANT",
            SessionError::AlreadyFound(_) => "ALREADY_FOUND",
            SessionError::WrongPhase { .. } => "WRONG_PHASE",
        }
    }
}

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    version: u64,
    config: GameConfig,
    phase: SessionPhase,
    participants: Vec<ParticipantName>,
    /// Catalog permutation drawn on start, empty during setup
    items: Vec<String>,
    round_index: usize,
    scores: HashMap<ParticipantName, u32>,
    completion_order: Vec<ParticipantName>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            version: 1,
            config,
            phase: SessionPhase::Setup,
            participants: Vec::new(),
            items: Vec::new(),
            round_index: 0,
            scores: HashMap::new(),
            completion_order: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn participants(&self) -> &[ParticipantName] {
        &self.participants
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn round_index(&self) -> usize {
        self.round_index
    }

    /// 1-based round number for display, 0 while still in setup
    pub fn round_no(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.round_index + 1
        }
    }

    pub fn total_rounds(&self) -> usize {
        self.items.len()
    }

    /// Prompt for the round being played
    pub fn current_item(&self) -> Option<&str> {
        match self.phase {
            SessionPhase::InRound | SessionPhase::RoundComplete => {
                self.items.get(self.round_index).map(String::as_str)
            }
            SessionPhase::Setup | SessionPhase::Ended => None,
        }
    }

    pub fn completion_order(&self) -> &[ParticipantName] {
        &self.completion_order
    }

    /// Actions the session would accept right now
    pub fn valid_actions(&self) -> Vec<SessionAction> {
        use SessionAction::*;

        match self.phase {
            SessionPhase::Setup if self.participants.len() >= MIN_PARTICIPANTS => {
                vec![AddParticipant, StartGame, ResetGame]
            }
            SessionPhase::Setup => vec![AddParticipant, ResetGame],
            SessionPhase::InRound => vec![MarkFound, EndGame, ResetGame],
            SessionPhase::RoundComplete => vec![NextRound, EndGame, ResetGame],
            SessionPhase::Ended => vec![ResetGame],
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id.clone(),
            version: self.version,
            phase: self.phase,
            round_index: self.round_index,
            round_no: self.round_no(),
            total_rounds: self.total_rounds(),
            current_item: self.current_item().map(str::to_string),
            participants: self.participants.clone(),
            scores: self.score_table(),
            completion_order: self.completion_order.clone(),
            leaderboard: self.leaderboard(),
            items: self.items.clone(),
            valid_actions: self.valid_actions(),
        }
    }

    fn require_phase(&self, action: SessionAction, allowed: &[SessionPhase]) -> SessionResult<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(SessionError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
