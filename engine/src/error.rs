//! Error Module
//!
//! A single error type for the navigation core. Geometry and configuration
//! errors are fatal at startup; `InvalidState` is per-frame and recoverable
//! (the frame is skipped and the player keeps its last valid position).

use glam::Vec3;
use thiserror::Error;

/// Errors produced by the navigation core.
#[derive(Debug, Error)]
pub enum NavError {
    /// A wall box has zero, negative, or non-finite extent.
    #[error("invalid geometry: wall {index} has degenerate size {size}")]
    InvalidGeometry {
        /// Index of the offending wall in placement order.
        index: usize,
        /// The box dimensions that were rejected.
        size: Vec3,
    },

    /// A position, velocity, or frame delta is not usable.
    #[error("invalid state: {what} is {value}")]
    InvalidState {
        /// Which quantity failed validation.
        what: &'static str,
        /// The rejected value (scalars are splatted).
        value: Vec3,
    },

    /// `update_wall` was called with an index past the end of the registry.
    #[error("wall index {index} out of range (registry holds {len} walls)")]
    WallIndexOutOfRange { index: usize, len: usize },

    /// A configuration value is outside its allowed range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NavError {
    /// Shorthand for a non-finite vector quantity.
    pub(crate) fn invalid_vec(what: &'static str, value: Vec3) -> Self {
        NavError::InvalidState { what, value }
    }

    /// Shorthand for a rejected scalar quantity.
    pub(crate) fn invalid_scalar(what: &'static str, value: f32) -> Self {
        NavError::InvalidState {
            what,
            value: Vec3::splat(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_geometry_message_names_wall() {
        let err = NavError::InvalidGeometry {
            index: 3,
            size: Vec3::new(10.0, 0.0, 0.5),
        };
        let msg = err.to_string();
        assert!(msg.contains("wall 3"), "unexpected message: {msg}");
    }

    #[test]
    fn test_invalid_scalar_splats_value() {
        match NavError::invalid_scalar("dt", -1.0) {
            NavError::InvalidState { what, value } => {
                assert_eq!(what, "dt");
                assert_eq!(value, Vec3::splat(-1.0));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
