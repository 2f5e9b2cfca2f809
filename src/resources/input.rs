//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. Each gameplay action carries a
//! primary and an alternate binding (letter key and arrow key), so either one
//! activates it.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with its keyboard bindings.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether either bound key is currently held this frame.
    pub active: bool,
    /// Whether either bound key was just pressed this frame.
    pub just_pressed: bool,
    /// Primary key bound to this action.
    pub key_binding: KeyboardKey,
    /// Alternate key bound to this action.
    pub alt_binding: KeyboardKey,
}

impl BoolState {
    fn bound(key_binding: KeyboardKey, alt_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
            alt_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL, KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay:
/// horizontal movement (A/D plus arrows) and quitting (Esc).
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub action_back: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_left: BoolState::bound(KeyboardKey::KEY_A, KeyboardKey::KEY_LEFT),
            move_right: BoolState::bound(KeyboardKey::KEY_D, KeyboardKey::KEY_RIGHT),
            action_back: BoolState::bound(KeyboardKey::KEY_ESCAPE, KeyboardKey::KEY_NULL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.move_left.active);
        assert!(!input.move_right.active);
        assert!(!input.action_back.active);
        assert!(!input.move_left.just_pressed);
        assert!(!input.action_back.just_pressed);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.move_left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.move_left.alt_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.move_right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.move_right.alt_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.action_back.key_binding, KeyboardKey::KEY_ESCAPE);
    }
}
