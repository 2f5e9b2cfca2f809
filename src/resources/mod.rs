//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, asset stores,
//! session counters, and spawn policy. Each submodule documents the semantics
//! and intended usage of its resource(s).
//!
//! Overview
//! - `animationclock` – shared step clock driving all animations in lockstep
//! - `animationstore` – spritesheet definitions reused across entities
//! - `catalog` – sprite/item configuration and resolved item archetypes
//! - `gameconfig` – window and gameplay settings from `config.ini`
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `screensize` – framebuffer dimensions in pixels
//! - `session` – score and lives for the current play session
//! - `spawner` – random-walk spawn policy and the session RNG
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta

pub mod animationclock;
pub mod animationstore;
pub mod catalog;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod screensize;
pub mod session;
pub mod spawner;
pub mod texturestore;
pub mod worldtime;
