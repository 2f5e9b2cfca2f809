//! High-level game state resources.
//!
//! These resources track the authoritative current state of the session and
//! any pending transition requested by systems. See
//! [`crate::events::gamestate::observe_gamestate_change_event`] for how a
//! transition is applied.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the game can be in.
///
/// `GameOver` is terminal: once entered, the only transition still honored is
/// `Quitting` (so window close keeps working); everything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    Setup,
    Playing,
    GameOver,
    Quitting,
}

/// Representation of a requested next state.
///
/// Use [`NextGameState::set`] to mark a transition as pending; an observer
/// will later apply it and reset the value to [`NextGameStates::Unchanged`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::None`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::None,
        }
    }

    /// Read-only access to the current state.
    pub fn get(&self) -> &GameStates {
        &self.current
    }

    /// Update the current state immediately.
    ///
    /// `GameOver` is not re-enterable or leavable except towards `Quitting`.
    /// Prefer requesting transitions via [`NextGameState`] and the event
    /// observer so transitions are logged.
    pub fn set(&mut self, state: GameStates) {
        if self.current == GameStates::GameOver && state != GameStates::Quitting {
            return;
        }
        self.current = state;
    }
}

/// Intent to change to a new game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    /// Create a new value initialized to [`NextGameStates::Unchanged`].
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    /// Get the current transition request.
    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Request a transition to `next` by marking it as pending.
    ///
    /// The `check_pending_state` system will emit the change event.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    /// Reset to [`NextGameStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamestate_starts_none() {
        let state = GameState::new();
        assert_eq!(*state.get(), GameStates::None);
    }

    #[test]
    fn test_gamestate_transitions() {
        let mut state = GameState::new();
        state.set(GameStates::Playing);
        assert_eq!(*state.get(), GameStates::Playing);
        state.set(GameStates::GameOver);
        assert_eq!(*state.get(), GameStates::GameOver);
    }

    #[test]
    fn test_gameover_is_terminal() {
        let mut state = GameState::new();
        state.set(GameStates::GameOver);
        state.set(GameStates::Playing);
        assert_eq!(*state.get(), GameStates::GameOver);
        // Quitting is still honored so the window can close.
        state.set(GameStates::Quitting);
        assert_eq!(*state.get(), GameStates::Quitting);
    }

    #[test]
    fn test_next_gamestate_pending_and_reset() {
        let mut next = NextGameState::new();
        assert_eq!(*next.get(), NextGameStates::Unchanged);
        next.set(GameStates::Playing);
        assert_eq!(
            *next.get(),
            NextGameStates::Pending(GameStates::Playing)
        );
        next.reset();
        assert_eq!(*next.get(), NextGameStates::Unchanged);
    }
}
