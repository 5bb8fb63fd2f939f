//! Player State
//!
//! The single mutable position + orientation of the first-person player.
//! Only the navigator's tick writes to it: look deltas fold into yaw/pitch,
//! the collision resolver commits the position.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec3;

use crate::physics::{PLAYER_HALF_EXTENT, PLAYER_HEIGHT, PlayerFootprint};

/// Walk speed in meters per second
pub const WALK_SPEED: f32 = 5.0;

/// Pointer sensitivity in radians per device unit
pub const LOOK_SENSITIVITY: f32 = 0.002;

/// Pitch limit magnitude: straight up / straight down
pub const PITCH_LIMIT: f32 = FRAC_PI_2;

/// Player position, orientation, and movement parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Eye position in world space
    pub position: Vec3,
    /// Horizontal look angle (radians), wrapped into `[-pi, pi]` by look input
    pub yaw: f32,
    /// Vertical look angle (radians), kept within `±pitch_limit`
    pitch: f32,
    pitch_limit: f32,
    /// Eye height above the feet
    pub height: f32,
    pub half_width: f32,
    pub half_depth: f32,
    /// Units per second
    pub speed: f32,
    /// Displacement computed for the current frame
    pub velocity: Vec3,
    /// Reserved for vertical dynamics; always `true` on flat mazes
    pub on_floor: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, PLAYER_HEIGHT, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            pitch_limit: PITCH_LIMIT,
            height: PLAYER_HEIGHT,
            half_width: PLAYER_HALF_EXTENT,
            half_depth: PLAYER_HALF_EXTENT,
            speed: WALK_SPEED,
            velocity: Vec3::ZERO,
            on_floor: true,
        }
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default player standing at `position`.
    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set pitch, clamped to the pitch limit.
    #[inline]
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-self.pitch_limit, self.pitch_limit);
    }

    #[inline]
    pub fn pitch_limit(&self) -> f32 {
        self.pitch_limit
    }

    /// Change the pitch limit; the current pitch is re-clamped.
    pub fn set_pitch_limit(&mut self, limit: f32) {
        self.pitch_limit = limit.abs().min(PITCH_LIMIT);
        self.set_pitch(self.pitch);
    }

    /// Orientation `(yaw, pitch)` after a raw pointer delta, without applying it.
    ///
    /// Moving right (positive `dx`) turns right, which is a negative yaw
    /// change; moving down (positive `dy`) looks down. Yaw is wrapped into
    /// `[-pi, pi]` once it leaves that range; pitch is clamped. Either may be
    /// non-finite if the scaled delta overflows.
    pub fn looked(&self, dx: f32, dy: f32, sensitivity: f32) -> (f32, f32) {
        let mut yaw = self.yaw - dx * sensitivity;
        if yaw.abs() > PI {
            yaw = (yaw + PI).rem_euclid(TAU) - PI;
        }
        let pitch = (self.pitch - dy * sensitivity).clamp(-self.pitch_limit, self.pitch_limit);
        (yaw, pitch)
    }

    /// Fold a raw pointer delta into orientation.
    pub fn apply_look(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        let (yaw, pitch) = self.looked(dx, dy, sensitivity);
        self.yaw = yaw;
        self.set_pitch(pitch);
    }

    /// Collision volume for the current dimensions.
    pub fn footprint(&self) -> PlayerFootprint {
        PlayerFootprint::new(self.half_width, self.half_depth, self.height)
    }

    pub fn reset_orientation(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}
