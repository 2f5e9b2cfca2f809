//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`]. Pressing
//! the back action (Esc) requests the `Quitting` state.

use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    mut next_state: ResMut<NextGameState>,
    rl: NonSendMut<raylib::RaylibHandle>,
) {
    let poll = |state: &BoolState| -> (bool, bool) {
        let mut active = rl.is_key_down(state.key_binding);
        let mut just_pressed = rl.is_key_pressed(state.key_binding);
        if state.alt_binding != KeyboardKey::KEY_NULL {
            active |= rl.is_key_down(state.alt_binding);
            just_pressed |= rl.is_key_pressed(state.alt_binding);
        }
        (active, just_pressed)
    };

    (input.move_left.active, input.move_left.just_pressed) = poll(&input.move_left);
    (input.move_right.active, input.move_right.just_pressed) = poll(&input.move_right);
    (input.action_back.active, input.action_back.just_pressed) = poll(&input.action_back);

    if input.action_back.just_pressed {
        next_state.set(GameStates::Quitting);
    }
}
