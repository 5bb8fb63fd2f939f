//! World Module
//!
//! Static level description and the collision geometry derived from it.
//!
//! - [`maze`] - Serializable wall placements and the demo maze layout
//! - [`geometry`] - The `GeometryRegistry` that owns walls and their AABBs

pub mod geometry;
pub mod maze;

pub use geometry::{GeometryRegistry, Wall};
pub use maze::{MazeLayout, WALL_CENTER_Y, WALL_SIZE, WallSpec};
