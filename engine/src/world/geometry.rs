//! Geometry Registry Module
//!
//! Owns the static walls and their collision boxes. The registry is the only
//! source of obstacles for collision queries; it is built once from a
//! [`MazeLayout`] and is read-only afterwards, apart from the explicit
//! [`GeometryRegistry::update_wall`] mesh-update event.
//!
//! The registry serializes as its layout. Deserializing rebuilds every box
//! from the placements, so a round-trip yields bit-identical AABBs.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::maze::{MazeLayout, WallSpec};
use crate::error::NavError;
use crate::physics::{Aabb, SpatialIndex};

/// A placed wall box and its derived collision volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wall {
    /// Box center in world space
    pub position: Vec3,
    /// Rotation about +Y in radians
    pub yaw: f32,
    /// Box dimensions before rotation
    pub scale: Vec3,
    aabb: Aabb,
}

impl Wall {
    /// Builds a wall and computes its AABB.
    ///
    /// `index` is only used to label the error.
    pub fn new(index: usize, position: Vec3, yaw: f32, scale: Vec3) -> Result<Self, NavError> {
        let aabb = Aabb::from_yawed_box(position, scale, yaw);
        if !yaw.is_finite() || !aabb.is_finite() || !aabb.has_volume() || scale.cmple(Vec3::ZERO).any() {
            return Err(NavError::InvalidGeometry { index, size: scale });
        }
        Ok(Self {
            position,
            yaw,
            scale,
            aabb,
        })
    }

    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The placement this wall was built from.
    pub fn spec(&self) -> WallSpec {
        WallSpec::new(self.position, self.yaw)
    }
}

/// The set of static walls used for collision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "MazeLayout", try_from = "MazeLayout")]
pub struct GeometryRegistry {
    wall_size: Vec3,
    walls: Vec<Wall>,
}

impl Default for GeometryRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

impl GeometryRegistry {
    /// A registry with no walls; every move is accepted.
    pub fn empty() -> Self {
        Self {
            wall_size: MazeLayout::empty().wall_size,
            walls: Vec::new(),
        }
    }

    /// Builds one wall per placement, all sharing `wall_size`.
    ///
    /// Fails with [`NavError::InvalidGeometry`] on the first degenerate box.
    pub fn build(specs: &[WallSpec], wall_size: Vec3) -> Result<Self, NavError> {
        let walls = specs
            .iter()
            .enumerate()
            .map(|(index, spec)| Wall::new(index, spec.position, spec.yaw, wall_size))
            .collect::<Result<Vec<_>, _>>()?;

        info!(walls = walls.len(), ?wall_size, "geometry registry built");
        Ok(Self { wall_size, walls })
    }

    /// Builds the registry for a layout.
    pub fn from_layout(layout: &MazeLayout) -> Result<Self, NavError> {
        Self::build(&layout.walls, layout.wall_size)
    }

    /// The placements this registry holds, in index order.
    pub fn specs(&self) -> Vec<WallSpec> {
        self.walls.iter().map(Wall::spec).collect()
    }

    /// The layout that rebuilds this registry.
    pub fn layout(&self) -> MazeLayout {
        MazeLayout {
            wall_size: self.wall_size,
            walls: self.specs(),
        }
    }

    #[inline]
    pub fn wall_size(&self) -> Vec3 {
        self.wall_size
    }

    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn get(&self, index: usize) -> Option<&Wall> {
        self.walls.get(index)
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter()
    }

    /// Collision boxes in index order.
    pub fn aabbs(&self) -> impl Iterator<Item = Aabb> + '_ {
        self.walls.iter().map(|wall| wall.aabb)
    }

    /// Union of all wall boxes, or `None` for an empty registry.
    pub fn bounds(&self) -> Option<Aabb> {
        self.aabbs().reduce(|acc, aabb| acc.union(&aabb))
    }

    /// Replaces a wall's transform and recomputes its AABB.
    ///
    /// On error the registry is left unchanged.
    pub fn update_wall(&mut self, index: usize, position: Vec3, yaw: f32) -> Result<&Wall, NavError> {
        let len = self.walls.len();
        let scale = self.wall_size;
        let slot = self
            .walls
            .get_mut(index)
            .ok_or(NavError::WallIndexOutOfRange { index, len })?;
        *slot = Wall::new(index, position, yaw, scale)?;
        debug!(index, ?position, yaw, "wall transform updated");
        Ok(&*slot)
    }
}

impl SpatialIndex for GeometryRegistry {
    fn first_overlap(&self, query: &Aabb) -> Option<usize> {
        self.walls.iter().position(|wall| wall.aabb.intersects(query))
    }
}

impl From<GeometryRegistry> for MazeLayout {
    fn from(registry: GeometryRegistry) -> Self {
        registry.layout()
    }
}

impl TryFrom<MazeLayout> for GeometryRegistry {
    type Error = NavError;

    fn try_from(layout: MazeLayout) -> Result<Self, Self::Error> {
        GeometryRegistry::from_layout(&layout)
    }
}
