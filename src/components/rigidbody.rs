use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing a per-tick velocity.
///
/// Gameplay movement in this crate is tick-based (one loop iteration moves an
/// entity by its velocity once), which keeps fall/respawn timings exact for a
/// given tick rate. The main loop caps the tick rate via raylib's target FPS.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per tick.
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Create a RigidBody with the given velocity.
    pub fn with_velocity(x: f32, y: f32) -> Self {
        Self {
            velocity: Vector2 { x, y },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rigidbody_new_is_at_rest() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity.x, 0.0);
        assert_eq!(rb.velocity.y, 0.0);
    }

    #[test]
    fn test_rigidbody_with_velocity() {
        let rb = RigidBody::with_velocity(1.5, -2.0);
        assert_eq!(rb.velocity.x, 1.5);
        assert_eq!(rb.velocity.y, -2.0);
    }
}
