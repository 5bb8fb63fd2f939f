//! Maze Walk Engine Library
//!
//! Collision-constrained first-person navigation through a static maze.
//! The library is window-system agnostic: a host feeds it key, pointer and
//! focus events plus a frame delta, and reads back a camera pose.
//!
//! # Modules
//!
//! - [`input`] - Movement intent, look-delta buffering and the engagement lock
//! - [`player`] - Player state and the motion integrator
//! - [`physics`] - AABBs, broad-phase indices and the collision resolver
//! - [`world`] - Maze layouts and the geometry registry
//! - [`camera`] - The pose handed to rendering
//! - [`navigation`] - The per-frame tick tying it all together
//! - [`config`] - Serde-backed configuration
//!
//! # Example
//!
//! ```ignore
//! use maze_walk_engine::{KeyCode, NavConfig, Navigator};
//!
//! let mut nav = Navigator::new(NavConfig::default())?;
//!
//! // Pointer click, then the host reports capture succeeded
//! nav.input_mut().request_lock();
//! nav.input_mut().grant_lock();
//!
//! // Handle keyboard and pointer input
//! nav.input_mut().handle_key(KeyCode::W, true);
//! nav.input_mut().handle_pointer_motion(4.0, -2.0);
//!
//! // Once per rendered frame
//! let report = nav.apply_frame(1.0 / 60.0)?;
//! println!("eye at {}", report.pose.position);
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod navigation;
pub mod physics;
pub mod player;
pub mod world;

pub use camera::CameraPose;
pub use config::{BroadPhase, NavConfig};
pub use error::NavError;
// Re-export commonly used input types
pub use input::{EngagementState, InputIntent, InputState, KeyCode, LockAction};
pub use navigation::{FrameReport, Navigator};
pub use physics::{Aabb, CollisionPolicy, CollisionResolver, PlayerFootprint};
pub use player::{PlayerState, compute_velocity};
pub use world::{GeometryRegistry, MazeLayout, WallSpec};
