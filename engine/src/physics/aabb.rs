//! Axis-Aligned Bounding Box
//!
//! The single collision primitive of the navigation core. Walls and the
//! player footprint are both expressed as `Aabb`s, and every collision query
//! reduces to the closed-interval overlap test in [`Aabb::intersects`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world space.
///
/// Invariant: `min <= max` componentwise. Every constructor orders its
/// corners, including deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "AabbCorners", into = "AabbCorners")]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

/// Wire form of an [`Aabb`]; corners are re-ordered on the way in.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct AabbCorners {
    min: Vec3,
    max: Vec3,
}

impl From<AabbCorners> for Aabb {
    fn from(corners: AabbCorners) -> Self {
        Aabb::new(corners.min, corners.max)
    }
}

impl From<Aabb> for AabbCorners {
    fn from(aabb: Aabb) -> Self {
        AabbCorners {
            min: aabb.min,
            max: aabb.max,
        }
    }
}

impl Aabb {
    /// Builds a box from two opposite corners, in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Builds a box centered at `center` with the given half extents.
    ///
    /// Negative half extents are folded to their absolute value.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let he = half_extents.abs();
        Self {
            min: center - he,
            max: center + he,
        }
    }

    /// Bounds a `size` box centered at `center` and rotated by `yaw` radians
    /// about +Y.
    ///
    /// Uses the rotated-extent form `|cos|*hx + |sin|*hz` rather than
    /// transforming all eight corners; the result is identical and exact for
    /// `yaw == 0`.
    pub fn from_yawed_box(center: Vec3, size: Vec3, yaw: f32) -> Self {
        let half = size.abs() * 0.5;
        let (sin, cos) = yaw.sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let half_extents = Vec3::new(
            cos * half.x + sin * half.z,
            half.y,
            sin * half.x + cos * half.z,
        );
        Self::from_center_half_extents(center, half_extents)
    }

    /// Minimum corner.
    #[inline]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Maximum corner.
    #[inline]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full extent along each axis.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns `true` if the two boxes overlap on all three axes.
    ///
    /// Intervals are closed: boxes that merely touch on a face, edge, or
    /// corner count as intersecting.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// The same box moved by `offset`.
    #[inline]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Aabb) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns `true` if both corners are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Returns `true` if the box has strictly positive extent on every axis.
    pub fn has_volume(&self) -> bool {
        self.size().cmpgt(Vec3::ZERO).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_new_orders_corners() {
        let aabb = Aabb::new(Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 2.0, -3.0));
        assert_eq!(aabb.min(), Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(aabb.max(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_intersects_overlapping() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::splat(0.5), Vec3::splat(1.5));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_faces_intersect() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_separated_on_one_axis_does_not_intersect() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        // Overlaps on X and Y but not Z
        let b = Aabb::new(Vec3::new(0.5, 0.5, 1.01), Vec3::new(1.5, 1.5, 2.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_yawed_box_zero_yaw_is_exact() {
        let aabb = Aabb::from_yawed_box(Vec3::new(0.0, 1.5, -5.0), Vec3::new(10.0, 3.0, 0.5), 0.0);
        assert_eq!(aabb.min(), Vec3::new(-5.0, 0.0, -5.25));
        assert_eq!(aabb.max(), Vec3::new(5.0, 3.0, -4.75));
    }

    #[test]
    fn test_yawed_box_quarter_turn_swaps_extents() {
        let aabb = Aabb::from_yawed_box(Vec3::ZERO, Vec3::new(10.0, 3.0, 0.5), FRAC_PI_2);
        let size = aabb.size();
        assert!((size.x - 0.5).abs() < 1e-4, "x extent was {}", size.x);
        assert!((size.y - 3.0).abs() < 1e-6);
        assert!((size.z - 10.0).abs() < 1e-4, "z extent was {}", size.z);
    }

    #[test]
    fn test_has_volume() {
        assert!(Aabb::new(Vec3::ZERO, Vec3::ONE).has_volume());
        assert!(!Aabb::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0)).has_volume());
    }

    #[test]
    fn test_contains_point_and_union() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::splat(2.0), Vec3::splat(3.0));
        let u = a.union(&b);
        assert_eq!(u.min(), Vec3::ZERO);
        assert_eq!(u.max(), Vec3::splat(3.0));
        assert!(u.contains_point(Vec3::splat(1.5)));
        assert!(!a.contains_point(Vec3::splat(1.5)));
    }

    #[test]
    fn test_deserialize_reorders_corners() {
        let aabb: Aabb = serde_json::from_str(r#"{"min":[1.0,1.0,1.0],"max":[0.0,0.0,0.0]}"#).unwrap();
        assert_eq!(aabb.min(), Vec3::ZERO);
        assert_eq!(aabb.max(), Vec3::ONE);
    }
}
