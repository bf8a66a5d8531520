use super::{GameSession, SessionError, SessionResult};
use crate::types::*;

impl GameSession {
    /// Add a participant during setup
    ///
    /// Surrounding whitespace is dropped; the remaining text must be unique
    /// (exact, case-sensitive match). Returns the stored name.
    pub fn add_participant(&mut self, name: &str) -> SessionResult<ParticipantName> {
        self.require_phase(SessionAction::AddParticipant, &[SessionPhase::Setup])?;

        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        if name.chars().count() > self.config.max_name_chars {
            return Err(SessionError::NameTooLong {
                max: self.config.max_name_chars,
            });
        }
        if self.is_participant(name) {
            return Err(SessionError::DuplicateParticipant(name.to_string()));
        }
        if self.participants.len() >= self.config.max_participants {
            return Err(SessionError::RosterFull {
                max: self.config.max_participants,
            });
        }

        self.participants.push(name.to_string());
        self.touch();
        Ok(name.to_string())
    }

    pub fn is_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;

    #[test]
    fn test_add_preserves_insertion_order() {
        let session = with_roster(&["Carla", "Ahmed", "Bo"]);
        assert_eq!(session.participants(), &["Carla", "Ahmed", "Bo"]);
    }

    #[test]
    fn test_duplicate_name_leaves_roster_unchanged() {
        let mut session = with_roster(&["A", "B"]);

        let result = session.add_participant("A");
        assert_eq!(
            result,
            Err(SessionError::DuplicateParticipant("A".to_string()))
        );
        assert_eq!(session.participants(), &["A", "B"]);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut session = with_roster(&["anna"]);
        assert!(session.add_participant("Anna").is_ok());
        assert_eq!(session.participants().len(), 2);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut session = with_roster(&["Bob"]);

        assert_eq!(session.add_participant("   "), Err(SessionError::EmptyName));
        assert_eq!(session.add_participant(""), Err(SessionError::EmptyName));
        assert!(matches!(
            session.add_participant("  Bob "),
            Err(SessionError::DuplicateParticipant(_))
        ));
        assert_eq!(session.add_participant(" Eve\t").unwrap(), "Eve");
        assert_eq!(session.participants(), &["Bob", "Eve"]);
    }

    #[test]
    fn test_config_limits() {
        let mut session = GameSession::new(GameConfig {
            max_participants: 2,
            max_name_chars: 5,
        });

        assert_eq!(
            session.add_participant("Maximilian"),
            Err(SessionError::NameTooLong { max: 5 })
        );
        session.add_participant("Ana").unwrap();
        session.add_participant("Ben").unwrap();
        assert_eq!(
            session.add_participant("Cy"),
            Err(SessionError::RosterFull { max: 2 })
        );
    }

    #[test]
    fn test_cannot_add_after_start() {
        let mut session = started(&["A", "B"]);

        let result = session.add_participant("C");
        assert!(matches!(result, Err(SessionError::WrongPhase { .. })));
        assert_eq!(session.participants().len(), 2);
        assert!(!session.is_participant("C"));
    }
}
