//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`animation`] – spritesheet playback state and movement heading
//! - [`boxcollider`] – axis-aligned rectangular collider centered on the entity
//! - [`falling`] – marker for items that fall and recycle through the spawner
//! - [`inputcontrolled`] – input-driven movement intent for keyboard and mouse
//! - [`itemeffect`] – beneficial/harmful classification of a falling item
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`rotation`] – rotation angle in degrees
//! - [`scale`] – 2D scale factor for sprites
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod falling;
pub mod inputcontrolled;
pub mod itemeffect;
pub mod mapposition;
pub mod rigidbody;
pub mod rotation;
pub mod scale;
pub mod sprite;
pub mod zindex;
