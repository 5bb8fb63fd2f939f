//! Maze Layout Module
//!
//! Wall placements for the demo maze. Every wall is the same box
//! (10 x 3 x 0.5 by default) placed by position and yaw; the layout is the
//! serializable description the geometry registry is built from.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Default wall box: 10 wide (X), 3 tall (Y), 0.5 thick (Z) before rotation.
pub const WALL_SIZE: Vec3 = Vec3::new(10.0, 3.0, 0.5);

/// Wall center height, so a 3-unit wall stands on the floor.
pub const WALL_CENTER_Y: f32 = 1.5;

/// Placement of one wall: center position and rotation about +Y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSpec {
    pub position: Vec3,
    /// Radians about the vertical axis
    #[serde(default)]
    pub yaw: f32,
}

impl WallSpec {
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }
}

/// A complete maze description: shared wall size plus placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeLayout {
    pub wall_size: Vec3,
    pub walls: Vec<WallSpec>,
}

impl Default for MazeLayout {
    fn default() -> Self {
        Self::reference()
    }
}

impl MazeLayout {
    /// A layout with no walls.
    pub fn empty() -> Self {
        Self {
            wall_size: WALL_SIZE,
            walls: Vec::new(),
        }
    }

    /// The six-wall demo maze.
    ///
    /// A 10x10 room around the origin, closed on the north, west and east.
    /// The eastern half of its south side opens into a corridor that runs
    /// east between z=5 and z=10.
    pub fn reference() -> Self {
        let y = WALL_CENTER_Y;
        Self {
            wall_size: WALL_SIZE,
            walls: vec![
                WallSpec::new(Vec3::new(0.0, y, -5.0), 0.0),
                WallSpec::new(Vec3::new(-5.0, y, 0.0), FRAC_PI_2),
                WallSpec::new(Vec3::new(5.0, y, 0.0), FRAC_PI_2),
                WallSpec::new(Vec3::new(-5.0, y, 5.0), 0.0),
                WallSpec::new(Vec3::new(5.0, y, 10.0), 0.0),
                WallSpec::new(Vec3::new(10.0, y, 5.0), 0.0),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
}
