//! Physics module
//!
//! Collision-constrained motion against static, axis-aligned geometry.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, velocities in m/s, angles in radians.
//!
//! # Submodules
//!
//! - [`aabb`] - The `Aabb` primitive and its closed-interval overlap test
//! - [`spatial`] - Broad-phase `SpatialIndex` trait, linear scan and uniform grid
//! - [`collision`] - Player footprint and the `Rigid` / `AxisSlide` resolver

pub mod aabb;
pub mod collision;
pub mod spatial;

pub use aabb::Aabb;
pub use collision::{
    CollisionPolicy, CollisionResolver, PLAYER_HALF_EXTENT, PLAYER_HEIGHT, PlayerFootprint,
    Resolution,
};
pub use spatial::{MAX_CELLS_PER_OBSTACLE, SpatialIndex, UniformGrid};
