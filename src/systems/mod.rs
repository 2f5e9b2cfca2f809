//! Game systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations off the shared step clock
//! - [`catch`] – observer resolving caught items into score/lives and respawn
//! - [`collision`] – player-vs-item overlap checks and event emission
//! - [`falling`] – move items down and recycle them at the floor
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`mousecontroller`] – update entity positions based on mouse position
//! - [`playercontroller`] – translate held keys into player movement and heading
//! - [`render`] – draw world and HUD using Raylib
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod catch;
pub mod collision;
pub mod falling;
pub mod gamestate;
pub mod input;
pub mod mousecontroller;
pub mod playercontroller;
pub mod render;
pub mod time;
