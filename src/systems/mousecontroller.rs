//! Mouse-follow controller.
//!
//! Updates each [`MouseControlled`](crate::components::inputcontrolled::MouseControlled)
//! entity's position from the mouse cursor, converting the cursor's y-down
//! screen coordinates to the y-up world.

use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::MouseControlled;
use crate::components::mapposition::MapPosition;
use crate::resources::screensize::ScreenSize;

/// Update each mouse-controlled entity's `MapPosition` from the mouse's
/// world position.
pub fn mouse_controller(
    mut query: Query<(&MouseControlled, &mut MapPosition)>,
    screen: Res<ScreenSize>,
    rl: NonSend<raylib::RaylibHandle>,
) {
    let mouse = rl.get_mouse_position();
    let world_x = mouse.x;
    let world_y = screen.h as f32 - mouse.y;
    for (mouse_controlled, mut map_position) in query.iter_mut() {
        if mouse_controlled.follow_x {
            map_position.pos.x = world_x;
        }
        if mouse_controlled.follow_y {
            map_position.pos.y = world_y;
        }
    }
}
