use bevy_ecs::prelude::Resource;

/// Real time as seen by the simulation, updated once per frame.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Seconds since startup.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
