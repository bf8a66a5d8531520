use serde::{Deserialize, Serialize};

/// Opaque ID types for type safety
pub type SessionId = String;
pub type ParticipantName = String;

/// Points awarded per placement step (last finisher gets this, first gets N times this)
pub const POINTS_PER_PLACE: u32 = 10;

/// A game cannot start with fewer participants than this
pub const MIN_PARTICIPANTS: usize = 2;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionPhase {
    Setup,
    InRound,
    RoundComplete,
    Ended,
}

/// Host actions, used to advertise which ones the current phase accepts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionAction {
    AddParticipant,
    StartGame,
    MarkFound,
    NextRound,
    EndGame,
    ResetGame,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub max_participants: usize,
    pub max_name_chars: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_participants: 24,
            max_name_chars: 40,
        }
    }
}

/// Result of marking a participant as found
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Award {
    pub participant: ParticipantName,
    /// 1-based finishing place within the round
    pub place: usize,
    pub points: u32,
    pub round_complete: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreEntry {
    pub participant: ParticipantName,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: usize,
    pub participant: ParticipantName,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Host,
    Viewer,
}

/// Everything a client needs to render the current session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub version: u64,
    pub phase: SessionPhase,
    pub round_index: usize,
    /// 1-based round number, 0 before the game starts
    pub round_no: usize,
    pub total_rounds: usize,
    pub current_item: Option<String>,
    pub participants: Vec<ParticipantName>,
    pub scores: Vec<ScoreEntry>,
    pub completion_order: Vec<ParticipantName>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub items: Vec<String>,
    pub valid_actions: Vec<SessionAction>,
}
