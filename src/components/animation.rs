use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Movement state of an animated character, selecting which spritesheet row
/// is played. Row indices are 0-based and must stay below the sheet's
/// row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Heading {
    #[default]
    Idle,
    MovingRight,
    MovingLeft,
}

impl Heading {
    /// Spritesheet row for this heading.
    pub fn row(self) -> usize {
        match self {
            Heading::Idle => 0,
            Heading::MovingRight => 1,
            Heading::MovingLeft => 2,
        }
    }
}

/// Spritesheet playback state. Frame/row counts live in the
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore)
/// resource under `animation_key`; only the mutable per-entity state is here.
///
/// All animations advance on the shared
/// [`AnimationClock`](crate::resources::animationclock::AnimationClock), so
/// entities pointing at different sheets still step in lockstep.
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub heading: Heading,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            heading: Heading::Idle,
        }
    }
}
