//! Score and lives for one play session.

use bevy_ecs::prelude::Resource;

/// Counters for the current session, owned by the main loop and mutated by
/// the catch observer. Replaces what would otherwise be process-wide mutable
/// state.
#[derive(Resource, Debug, Clone, Copy)]
pub struct GameSession {
    pub score: u32,
    pub lives: i32,
}

impl GameSession {
    pub fn new(lives: i32) -> Self {
        Self { score: 0, lives }
    }

    /// A beneficial item was caught.
    pub fn collect(&mut self) {
        self.score += 1;
    }

    /// A harmful item was caught.
    pub fn deny(&mut self) {
        self.lives -= 1;
    }

    /// The session ends once lives reach zero or below.
    pub fn is_over(&self) -> bool {
        self.lives <= 0
    }

    /// Lives clamped for display; never shown negative.
    pub fn displayed_lives(&self) -> i32 {
        self.lives.max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_increments_score_by_one() {
        let mut session = GameSession::new(3);
        session.collect();
        session.collect();
        assert_eq!(session.score, 2);
        assert_eq!(session.lives, 3);
    }

    #[test]
    fn test_deny_decrements_lives_by_one() {
        let mut session = GameSession::new(3);
        session.deny();
        assert_eq!(session.lives, 2);
        assert_eq!(session.score, 0);
        assert!(!session.is_over());
    }

    #[test]
    fn test_session_over_at_zero_lives() {
        let mut session = GameSession::new(1);
        session.deny();
        assert!(session.is_over());
    }

    #[test]
    fn test_displayed_lives_never_negative() {
        let mut session = GameSession::new(0);
        session.deny();
        assert_eq!(session.lives, -1);
        assert_eq!(session.displayed_lives(), 0);
    }
}
