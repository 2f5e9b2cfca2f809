//! Animation system.
//!
//! Advances spritesheet playback off the shared
//! [`AnimationClock`](crate::resources::animationclock::AnimationClock) and
//! updates the visible sprite frame.
//!
//! # Animation Flow
//!
//! 1. Sheet layouts are defined in [`AnimationStore`](crate::resources::animationstore::AnimationStore)
//! 2. Entities have an [`Animation`](crate::components::animation::Animation)
//!    component pointing to a sheet key
//! 3. When the shared clock fires, every animation advances exactly one
//!    frame, wrapping modulo its own frame count
//! 4. The [`Sprite`](crate::components::sprite::Sprite) pixel offset is then
//!    recomputed from the frame index and the heading's row
//!
//! Because the clock's step reference is shared and only updated when a step
//! fires, all animated entities step in lockstep regardless of how many
//! frames their sheets have. Frame selection is purely discrete; there is no
//! interpolation.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationclock::AnimationClock;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update sprite frames.
///
/// Contract
/// - Reads [`WorldTime`] for the elapsed real time.
/// - Steps [`AnimationClock`] at the fixed cadence; on a step, every
///   `frame_index` advances by one, wrapping modulo the sheet's frame count.
/// - Clamps the heading row into the sheet's row range before applying it.
/// - Mutates [`Animation`] state and the [`Sprite`] offset.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    mut clock: ResMut<AnimationClock>,
    store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    let step = clock.tick(time.elapsed);

    for (mut anim, mut sprite) in query.iter_mut() {
        let Some(sheet) = store.get(&anim.animation_key) else {
            continue;
        };
        if sheet.frame_count == 0 || sheet.row_count == 0 {
            continue;
        }

        if step {
            anim.frame_index = (anim.frame_index + 1) % sheet.frame_count;
        }

        let row = anim.heading.row().min(sheet.row_count - 1);
        sprite.offset.x = anim.frame_index as f32 * sprite.width;
        sprite.offset.y = row as f32 * sprite.height;
    }
}
