//! Collision resolution module
//!
//! Decides how much of a proposed player displacement is applied, given the
//! static obstacles behind a [`SpatialIndex`].
//!
//! # Player Footprint
//!
//! The player is an upright box hanging below the eye position:
//! `min = p - (half_width, height, half_depth)`, `max = p + (half_width, 0, half_depth)`.
//!
//! # Policies
//!
//! - [`CollisionPolicy::Rigid`] - all-or-nothing. If the box at `p + v`
//!   touches any obstacle the whole move is rejected. A move that would be
//!   valid along one axis alone is still rejected when combined, so the
//!   player sticks to walls instead of sliding.
//! - [`CollisionPolicy::AxisSlide`] - the displacement is split into X, Y, Z
//!   components applied in that order, each with its own overlap test. The
//!   unblocked components still go through, which slides the player along
//!   walls.
//!
//! # Example
//!
//! ```ignore
//! use maze_walk_engine::physics::{Aabb, CollisionPolicy, CollisionResolver, PlayerFootprint};
//! use glam::Vec3;
//!
//! let walls = vec![Aabb::new(Vec3::new(-5.0, 0.0, -5.25), Vec3::new(5.0, 3.0, -4.75))];
//! let resolver = CollisionResolver::new(CollisionPolicy::Rigid);
//! let footprint = PlayerFootprint::default();
//!
//! let next = resolver.resolve(Vec3::new(0.0, 1.8, 1.0), Vec3::new(0.0, 0.0, -1.0), &footprint, &walls);
//! assert_eq!(next, Vec3::new(0.0, 1.8, 0.0));
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::spatial::SpatialIndex;

/// Default player height (eye position above the floor).
pub const PLAYER_HEIGHT: f32 = 1.8;

/// Default footprint half-width (X) and half-depth (Z).
pub const PLAYER_HALF_EXTENT: f32 = 0.3;

/// How a blocked displacement is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Reject the whole move on any overlap.
    #[default]
    Rigid,
    /// Apply each axis independently, keeping the unblocked ones.
    AxisSlide,
}

/// Collision volume of the player relative to its eye position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerFootprint {
    pub half_width: f32,
    pub half_depth: f32,
    /// Distance from the eye position down to the feet
    pub height: f32,
}

impl Default for PlayerFootprint {
    fn default() -> Self {
        Self {
            half_width: PLAYER_HALF_EXTENT,
            half_depth: PLAYER_HALF_EXTENT,
            height: PLAYER_HEIGHT,
        }
    }
}

impl PlayerFootprint {
    pub fn new(half_width: f32, half_depth: f32, height: f32) -> Self {
        Self {
            half_width,
            half_depth,
            height,
        }
    }

    /// The player box when the eye sits at `position`.
    #[inline]
    pub fn aabb_at(&self, position: Vec3) -> Aabb {
        Aabb::new(
            position - Vec3::new(self.half_width, self.height, self.half_depth),
            position + Vec3::new(self.half_width, 0.0, self.half_depth),
        )
    }
}

/// Outcome of a single resolve call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Position after collision handling
    pub position: Vec3,
    /// `true` if the full displacement was applied
    pub fully_applied: bool,
    /// Index of the first obstacle that blocked any part of the move
    pub blocked_by: Option<usize>,
}

/// Applies a [`CollisionPolicy`] to proposed moves.
///
/// Stateless apart from the policy; it never fails and only returns a
/// position. Input validation (finite values) is the caller's job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResolver {
    pub policy: CollisionPolicy,
}

impl CollisionResolver {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self { policy }
    }

    /// Returns the position the player ends up at after trying to move by
    /// `velocity` (a per-frame displacement) from `position`.
    pub fn resolve<I>(&self, position: Vec3, velocity: Vec3, footprint: &PlayerFootprint, walls: &I) -> Vec3
    where
        I: SpatialIndex + ?Sized,
    {
        self.resolve_detailed(position, velocity, footprint, walls).position
    }

    /// Like [`resolve`](Self::resolve), also reporting which obstacle blocked the move.
    pub fn resolve_detailed<I>(
        &self,
        position: Vec3,
        velocity: Vec3,
        footprint: &PlayerFootprint,
        walls: &I,
    ) -> Resolution
    where
        I: SpatialIndex + ?Sized,
    {
        if velocity == Vec3::ZERO {
            return Resolution {
                position,
                fully_applied: true,
                blocked_by: None,
            };
        }

        match self.policy {
            CollisionPolicy::Rigid => resolve_rigid(position, velocity, footprint, walls),
            CollisionPolicy::AxisSlide => resolve_axis_slide(position, velocity, footprint, walls),
        }
    }
}

fn resolve_rigid<I>(position: Vec3, velocity: Vec3, footprint: &PlayerFootprint, walls: &I) -> Resolution
where
    I: SpatialIndex + ?Sized,
{
    let candidate = position + velocity;
    match walls.first_overlap(&footprint.aabb_at(candidate)) {
        Some(index) => Resolution {
            position,
            fully_applied: false,
            blocked_by: Some(index),
        },
        None => Resolution {
            position: candidate,
            fully_applied: true,
            blocked_by: None,
        },
    }
}

fn resolve_axis_slide<I>(position: Vec3, velocity: Vec3, footprint: &PlayerFootprint, walls: &I) -> Resolution
where
    I: SpatialIndex + ?Sized,
{
    let mut current = position;
    let mut blocked_by = None;

    for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
        let step = velocity * axis;
        if step == Vec3::ZERO {
            continue;
        }
        let candidate = current + step;
        match walls.first_overlap(&footprint.aabb_at(candidate)) {
            Some(index) => {
                blocked_by.get_or_insert(index);
            }
            None => current = candidate,
        }
    }

    Resolution {
        position: current,
        fully_applied: blocked_by.is_none(),
        blocked_by,
    }
}
