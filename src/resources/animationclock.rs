//! Shared animation step clock.
//!
//! All animated entities advance their frames off this single clock, so every
//! sheet in the scene steps in visual lockstep. `last_step` is only updated
//! when a step actually fires, not every frame.

use bevy_ecs::prelude::Resource;

/// Fixed animation cadence in frame steps per second.
pub const ANIMATION_FPS: f32 = 12.0;

/// Timestamp (in [`WorldTime::elapsed`](super::worldtime::WorldTime) seconds)
/// of the last animation step.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct AnimationClock {
    pub last_step: f32,
}

impl AnimationClock {
    /// Returns true when a step is due at time `now`, advancing the clock.
    ///
    /// There is no catch-up: a long frame produces a single step, matching
    /// the discrete no-interpolation playback model.
    pub fn tick(&mut self, now: f32) -> bool {
        if now - self.last_step >= 1.0 / ANIMATION_FPS {
            self.last_step = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_step_before_frame_duration() {
        let mut clock = AnimationClock::default();
        assert!(!clock.tick(0.5 / ANIMATION_FPS));
        assert_eq!(clock.last_step, 0.0);
    }

    #[test]
    fn test_step_at_frame_duration() {
        let mut clock = AnimationClock::default();
        let t = 1.0 / ANIMATION_FPS;
        assert!(clock.tick(t));
        assert_eq!(clock.last_step, t);
    }

    #[test]
    fn test_long_frame_yields_single_step() {
        let mut clock = AnimationClock::default();
        assert!(clock.tick(10.0 / ANIMATION_FPS));
        // Clock jumped to `now`; an immediate re-query does not step again.
        assert!(!clock.tick(10.0 / ANIMATION_FPS));
    }
}
