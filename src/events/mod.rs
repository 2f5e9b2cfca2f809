//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to communicate without direct
//! dependencies.
//!
//! Submodules:
//! - [`collision`] – player/item overlap notifications from the collision system
//! - [`gamestate`] – state transition notifications for the high-level game flow

pub mod collision;
pub mod gamestate;
