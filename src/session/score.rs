use super::GameSession;
use crate::types::*;

impl GameSession {
    pub(super) fn award_points(&mut self, participant: &str, points: u32) {
        *self.scores.entry(participant.to_string()).or_insert(0) += points;
    }

    pub fn score_of(&self, participant: &str) -> Option<u32> {
        self.scores.get(participant).copied()
    }

    /// Score table in roster order; empty until the game starts
    pub fn score_table(&self) -> Vec<ScoreEntry> {
        self.participants
            .iter()
            .filter_map(|p| {
                self.scores.get(p).map(|&score| ScoreEntry {
                    participant: p.clone(),
                    score,
                })
            })
            .collect()
    }

    /// Participants ranked by score, highest first
    ///
    /// Equal scores keep roster order.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut entries = self.score_table();
        // Stable sort, ties stay in join order
        entries.sort_by(|a, b| b.score.cmp(&a.score));

        entries
            .into_iter()
            .enumerate()
            .map(|(i, e)| LeaderboardEntry {
                rank: i + 1,
                participant: e.participant,
                score: e.score,
            })
            .collect()
    }
}
