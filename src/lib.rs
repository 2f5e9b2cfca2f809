//! Fruitfall library.
//!
//! This module exposes the game's ECS components, resources, systems, and
//! events for use in integration tests and by the two binaries.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
