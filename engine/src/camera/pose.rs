//! Camera Pose Module
//!
//! Read-only snapshot of the player's eye after a tick, for the rendering
//! collaborator. Direction vectors follow the right-handed convention used
//! throughout the engine:
//! - +X = right
//! - +Y = up
//! - -Z = forward at yaw 0
//!
//! Positive yaw turns left (counter-clockwise seen from above).

use glam::{Mat4, Vec3};

use crate::player::PlayerState;

/// Position and orientation of the first-person camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl From<&PlayerState> for CameraPose {
    fn from(player: &PlayerState) -> Self {
        Self {
            position: player.position,
            yaw: player.yaw,
            pitch: player.pitch(),
        }
    }
}

impl CameraPose {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self { position, yaw, pitch }
    }

    /// View direction, including pitch. Normalized.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            -self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Horizontal right vector. Depends on yaw only, so it stays defined when
    /// looking straight up or down.
    #[inline]
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Right-handed view matrix looking along [`forward`](Self::forward).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up())
    }
}
