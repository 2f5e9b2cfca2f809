//! Keyboard movement resolver for the player.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! moves every [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! entity horizontally, selecting the matching animation heading.
//!
//! When both directions are held, both deltas are applied (net zero movement)
//! and the heading ends on `MovingRight` because the right branch is
//! evaluated last. That tie-break is intentional and covered by tests; keep
//! the branch order if you touch this.

use bevy_ecs::prelude::*;

use crate::components::animation::{Animation, Heading};
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::resources::input::InputState;

/// Apply held movement keys to each controlled entity, once per tick.
pub fn player_controller(
    mut query: Query<(&InputControlled, &mut MapPosition, Option<&mut Animation>)>,
    input: Res<InputState>,
) {
    for (controlled, mut position, mut maybe_anim) in query.iter_mut() {
        if input.move_left.active {
            position.pos.x -= controlled.speed;
            if let Some(anim) = maybe_anim.as_mut() {
                anim.heading = Heading::MovingLeft;
            }
        }
        if input.move_right.active {
            position.pos.x += controlled.speed;
            if let Some(anim) = maybe_anim.as_mut() {
                anim.heading = Heading::MovingRight;
            }
        }
        if !input.move_left.active && !input.move_right.active {
            if let Some(anim) = maybe_anim.as_mut() {
                anim.heading = Heading::Idle;
            }
        }
    }
}
