use super::{GameSession, SessionError, SessionResult};
use crate::catalog;
use crate::types::*;
use rand::seq::SliceRandom;
use rand::Rng;

impl GameSession {
    /// Shuffle the catalog, zero the score table and open round one
    pub fn start_game(&mut self) -> SessionResult<()> {
        self.start_game_with_rng(&mut rand::rng())
    }

    pub fn start_game_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SessionResult<()> {
        self.require_phase(SessionAction::StartGame, &[SessionPhase::Setup])?;

        if self.participants.len() < MIN_PARTICIPANTS {
            return Err(SessionError::NotEnoughParticipants {
                required: MIN_PARTICIPANTS,
                actual: self.participants.len(),
            });
        }

        let mut items = catalog::items();
        items.shuffle(rng);

        self.items = items;
        self.scores = self
            .participants
            .iter()
            .map(|p| (p.clone(), 0))
            .collect();
        self.round_index = 0;
        self.completion_order.clear();
        self.phase = SessionPhase::InRound;
        self.touch();
        Ok(())
    }

    /// Record that a participant brought back the current item
    ///
    /// The k-th finisher of N participants earns `(N - k + 1) * 10` points.
    /// Marking the last remaining participant completes the round.
    pub fn mark_found(&mut self, participant: &str) -> SessionResult<Award> {
        self.require_phase(SessionAction::MarkFound, &[SessionPhase::InRound])?;

        if !self.is_participant(participant) {
            return Err(SessionError::UnknownParticipant(participant.to_string()));
        }
        if self.completion_order.iter().any(|p| p == participant) {
            return Err(SessionError::AlreadyFound(participant.to_string()));
        }

        self.completion_order.push(participant.to_string());
        let place = self.completion_order.len();
        let points = placement_points(self.participants.len(), place);
        self.award_points(participant, points);

        let round_complete = self.completion_order.len() == self.participants.len();
        if round_complete {
            self.phase = SessionPhase::RoundComplete;
        }
        self.touch();

        Ok(Award {
            participant: participant.to_string(),
            place,
            points,
            round_complete,
        })
    }

    /// Move on from a completed round
    ///
    /// Once the last catalog item has been played the hunt ends instead.
    /// Returns the phase the session is in afterwards.
    pub fn next_round(&mut self) -> SessionResult<SessionPhase> {
        self.require_phase(SessionAction::NextRound, &[SessionPhase::RoundComplete])?;

        if self.round_index + 1 >= self.items.len() {
            self.phase = SessionPhase::Ended;
        } else {
            self.round_index += 1;
            self.completion_order.clear();
            self.phase = SessionPhase::InRound;
        }
        self.touch();
        Ok(self.phase)
    }

    /// Finish the hunt; points already awarded this round are kept
    pub fn end_game(&mut self) -> SessionResult<()> {
        self.require_phase(
            SessionAction::EndGame,
            &[SessionPhase::InRound, SessionPhase::RoundComplete],
        )?;

        self.phase = SessionPhase::Ended;
        self.touch();
        Ok(())
    }

    /// Wipe everything and return to setup under a fresh session id
    pub fn reset_game(&mut self) {
        let version = self.version;
        *self = GameSession::new(self.config.clone());
        self.version = version + 1;
    }
}

fn placement_points(participant_count: usize, place: usize) -> u32 {
    (participant_count - place + 1) as u32 * POINTS_PER_PLACE
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_start_requires_two_participants() {
        let mut session = with_roster(&["Solo"]);

        let result = session.start_game();
        assert_eq!(
            result,
            Err(SessionError::NotEnoughParticipants {
                required: 2,
                actual: 1
            })
        );
        assert_eq!(session.phase(), SessionPhase::Setup);
        assert!(session.score_table().is_empty());
        assert!(session.items().is_empty());
    }

    #[test]
    fn test_start_zeroes_every_participant() {
        for count in 2..=8 {
            let names: Vec<String> = (0..count).map(|i| format!("P{}", i)).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let session = started(&refs);

            let table = session.score_table();
            assert_eq!(table.len(), count);
            assert!(table.iter().all(|e| e.score == 0));
            let unique: HashSet<_> = table.iter().map(|e| &e.participant).collect();
            assert_eq!(unique.len(), count);
        }
    }

    #[test]
    fn test_start_shuffles_full_catalog() {
        let session = started(&["A", "B"]);

        let mut shuffled = session.items().to_vec();
        let mut expected = catalog::items();
        shuffled.sort();
        expected.sort();
        assert_eq!(shuffled, expected);
        assert_eq!(session.round_index(), 0);
        assert_eq!(session.current_item(), Some(session.items()[0].as_str()));
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut first = with_roster(&["A", "B"]);
        let mut second = with_roster(&["A", "B"]);
        first
            .start_game_with_rng(&mut StdRng::seed_from_u64(42))
            .unwrap();
        second
            .start_game_with_rng(&mut StdRng::seed_from_u64(42))
            .unwrap();

        assert_eq!(first.items(), second.items());
    }

    #[test]
    fn test_cannot_start_twice() {
        let mut session = started(&["A", "B"]);
        let items = session.items().to_vec();

        assert!(matches!(
            session.start_game(),
            Err(SessionError::WrongPhase { .. })
        ));
        assert_eq!(session.items(), items.as_slice());
    }

    #[test]
    fn test_three_player_round() {
        let mut session = started(&["A", "B", "C"]);

        let b = session.mark_found("B").unwrap();
        let a = session.mark_found("A").unwrap();
        let c = session.mark_found("C").unwrap();

        assert_eq!((b.place, b.points, b.round_complete), (1, 30, false));
        assert_eq!((a.place, a.points, a.round_complete), (2, 20, false));
        assert_eq!((c.place, c.points, c.round_complete), (3, 10, true));
        assert_eq!(session.phase(), SessionPhase::RoundComplete);

        let board: Vec<(String, u32)> = session
            .leaderboard()
            .into_iter()
            .map(|e| (e.participant, e.score))
            .collect();
        assert_eq!(
            board,
            vec![
                ("B".to_string(), 30),
                ("A".to_string(), 20),
                ("C".to_string(), 10)
            ]
        );
    }

    #[test]
    fn test_round_awards_arithmetic_series() {
        for n in 2..=10 {
            let names: Vec<String> = (0..n).map(|i| format!("P{}", i)).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let mut session = started(&refs);

            let total: u32 = refs
                .iter()
                .rev()
                .map(|name| session.mark_found(name).unwrap().points)
                .sum();
            assert_eq!(total, 10 * (n * (n + 1) / 2) as u32);
        }
    }

    #[test]
    fn test_double_mark_scores_once() {
        let mut session = started(&["A", "B", "C"]);

        session.mark_found("A").unwrap();
        assert_eq!(
            session.mark_found("A"),
            Err(SessionError::AlreadyFound("A".to_string()))
        );
        assert_eq!(session.score_of("A"), Some(30));
        assert_eq!(session.completion_order(), &["A"]);
    }

    #[test]
    fn test_mark_unknown_participant() {
        let mut session = started(&["A", "B"]);
        assert_eq!(
            session.mark_found("Z"),
            Err(SessionError::UnknownParticipant("Z".to_string()))
        );
        assert!(session.completion_order().is_empty());
    }

    #[test]
    fn test_mark_outside_round_is_ignored() {
        let mut session = with_roster(&["A", "B"]);
        assert!(matches!(
            session.mark_found("A"),
            Err(SessionError::WrongPhase { .. })
        ));

        let mut session = started(&["A", "B"]);
        session.mark_found("A").unwrap();
        session.mark_found("B").unwrap();
        assert!(matches!(
            session.mark_found("A"),
            Err(SessionError::WrongPhase { .. })
        ));
    }

    #[test]
    fn test_next_round_clears_order_and_keeps_scores() {
        let mut session = started(&["A", "B"]);
        session.mark_found("B").unwrap();
        session.mark_found("A").unwrap();

        assert_eq!(session.next_round(), Ok(SessionPhase::InRound));
        assert_eq!(session.round_index(), 1);
        assert_eq!(session.round_no(), 2);
        assert!(session.completion_order().is_empty());
        assert_eq!(session.current_item(), Some(session.items()[1].as_str()));

        session.mark_found("A").unwrap();
        session.mark_found("B").unwrap();
        assert_eq!(session.score_of("A"), Some(30));
        assert_eq!(session.score_of("B"), Some(30));
    }

    #[test]
    fn test_next_round_requires_complete_round() {
        let mut session = started(&["A", "B"]);
        session.mark_found("A").unwrap();

        assert!(matches!(
            session.next_round(),
            Err(SessionError::WrongPhase { .. })
        ));
        assert_eq!(session.round_index(), 0);
    }

    #[test]
    fn test_exhausting_catalog_ends_game() {
        let mut session = started(&["A", "B"]);
        let total = session.total_rounds();

        for round in 0..total {
            assert_eq!(session.round_index(), round);
            session.mark_found("A").unwrap();
            session.mark_found("B").unwrap();

            let phase = session.next_round().unwrap();
            if round + 1 < total {
                assert_eq!(phase, SessionPhase::InRound);
            } else {
                assert_eq!(phase, SessionPhase::Ended);
            }
        }

        assert_eq!(session.round_index(), total - 1);
        assert!(matches!(
            session.next_round(),
            Err(SessionError::WrongPhase { .. })
        ));
        assert_eq!(session.score_of("A"), Some(20 * total as u32));
        assert_eq!(session.score_of("B"), Some(10 * total as u32));
    }

    #[test]
    fn test_end_mid_round_keeps_partial_points() {
        let mut session = started(&["A", "B", "C"]);
        session.mark_found("C").unwrap();

        session.end_game().unwrap();
        assert_eq!(session.phase(), SessionPhase::Ended);
        assert_eq!(session.score_of("C"), Some(30));
        assert_eq!(session.score_of("A"), Some(0));
        assert_eq!(session.current_item(), None);
    }

    #[test]
    fn test_end_requires_running_game() {
        let mut session = with_roster(&["A", "B"]);
        assert!(session.end_game().is_err());
        assert_eq!(session.phase(), SessionPhase::Setup);

        let mut session = started(&["A", "B"]);
        session.end_game().unwrap();
        assert!(session.end_game().is_err());
    }

    #[test]
    fn test_reset_from_every_phase() {
        let mut setup = with_roster(&["A", "B"]);
        let mut in_round = started(&["A", "B"]);
        in_round.mark_found("A").unwrap();
        let mut complete = started(&["A", "B"]);
        complete.mark_found("A").unwrap();
        complete.mark_found("B").unwrap();
        let mut ended = started(&["A", "B"]);
        ended.end_game().unwrap();

        for session in [&mut setup, &mut in_round, &mut complete, &mut ended] {
            let old_id = session.id().to_string();
            let old_version = session.version();

            session.reset_game();

            assert_eq!(session.phase(), SessionPhase::Setup);
            assert!(session.participants().is_empty());
            assert!(session.score_table().is_empty());
            assert!(session.items().is_empty());
            assert!(session.completion_order().is_empty());
            assert_eq!(session.round_index(), 0);
            assert_ne!(session.id(), old_id);
            assert!(session.version() > old_version);
        }
    }

    #[test]
    fn test_placement_points() {
        assert_eq!(placement_points(4, 1), 40);
        assert_eq!(placement_points(4, 4), 10);
        assert_eq!(placement_points(2, 2), 10);
    }
}
