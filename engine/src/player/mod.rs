//! Player Module
//!
//! The first-person player and how intent turns into motion.
//!
//! # Components
//!
//! - [`PlayerState`] - Position, yaw/pitch, footprint dimensions and speed
//! - [`MotionIntegrator`] - Yaw + intent flags to a per-frame displacement
//!   - Diagonal input keeps its sqrt(2) speed-up unless normalization is enabled

pub mod movement;
pub mod state;

pub use movement::{MotionIntegrator, compute_velocity, movement_basis};
pub use state::{LOOK_SENSITIVITY, PITCH_LIMIT, PlayerState, WALK_SPEED};
