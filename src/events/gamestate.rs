//! Game state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and logs it. This decouples the intent to change state from the mechanics
//! of applying it and avoids borrowing conflicts.

use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::session::GameSession;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
///
/// Emitting this event causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]. If it contains [`Pending`], the observer updates the
/// authoritative [`GameState`] and clears the pending value; if it is
/// [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`] and resets the
///   request. [`GameState::set`] keeps `GameOver` terminal.
/// - Entering `GameOver` logs the final score.
/// - If a required resource is missing, logs a diagnostic and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    session: Option<Res<GameSession>>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!("GameState or NextGameState resource missing; transition skipped");
        return;
    };

    // Clone the pending value first so we don't hold a borrow while mutating.
    let next_state_value = next_game_state.get().clone();
    match next_state_value {
        Pending(new_state) => {
            info!(
                "Transitioning from {:?} to {:?}",
                game_state.get(),
                new_state
            );
            if new_state == GameStates::GameOver {
                if let Some(session) = session.as_deref() {
                    info!("GAME OVER! Final score: {}", session.score);
                }
            }
            game_state.set(new_state);
            next_game_state.reset();
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}
