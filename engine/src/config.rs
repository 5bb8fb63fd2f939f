//! Navigation Configuration
//!
//! Centralized, serde-backed configuration for the navigation core.
//! `Default` returns the demo's reference constants, and every section is
//! `#[serde(default)]` so a partial JSON file only overrides what it names.
//!
//! ```json
//! {
//!   "player": { "speed": 7.5 },
//!   "collision": { "policy": "axis-slide", "broad_phase": { "kind": "grid", "cell_size": 4.0 } },
//!   "maze": { "start_position": [0.0, 1.8, 2.0] }
//! }
//! ```

use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::physics::{
    Aabb, CollisionPolicy, MAX_CELLS_PER_OBSTACLE, PLAYER_HALF_EXTENT, PLAYER_HEIGHT, UniformGrid,
};
use crate::player::{LOOK_SENSITIVITY, WALK_SPEED};
use crate::world::{MazeLayout, WALL_SIZE, WallSpec};

/// Default grid cell edge, one wall length.
pub const DEFAULT_CELL_SIZE: f32 = 10.0;

/// Player body and speed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Eye height above the floor (meters)
    pub height: f32,
    /// Walk speed (m/s)
    pub speed: f32,
    pub half_width: f32,
    pub half_depth: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            height: PLAYER_HEIGHT,
            speed: WALK_SPEED,
            half_width: PLAYER_HALF_EXTENT,
            half_depth: PLAYER_HALF_EXTENT,
        }
    }
}

/// Pointer look parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Radians per device unit
    pub sensitivity: f32,
    /// Maximum pitch magnitude (radians), at most pi/2
    pub pitch_clamp: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            sensitivity: LOOK_SENSITIVITY,
            pitch_clamp: FRAC_PI_2,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Scale diagonal input to unit length (off: diagonals are sqrt(2) faster)
    pub normalize_diagonal: bool,
}

/// Which spatial index the resolver queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BroadPhase {
    /// Test every wall, in placement order
    #[default]
    Linear,
    /// Bucket walls into square XZ cells
    Grid { cell_size: f32 },
}

impl BroadPhase {
    pub fn grid() -> Self {
        BroadPhase::Grid {
            cell_size: DEFAULT_CELL_SIZE,
        }
    }

    /// Reject a grid whose cells are so small that some obstacle would be
    /// registered in more than [`MAX_CELLS_PER_OBSTACLE`] of them.
    ///
    /// Boxes with non-finite extents are skipped; geometry validation
    /// reports those. Always `Ok` for [`BroadPhase::Linear`].
    pub fn check_obstacles(self, obstacles: impl IntoIterator<Item = Aabb>) -> Result<(), NavError> {
        let BroadPhase::Grid { cell_size } = self else {
            return Ok(());
        };
        for (index, aabb) in obstacles.into_iter().enumerate() {
            if !aabb.min().is_finite() || !aabb.max().is_finite() {
                continue;
            }
            let cells = UniformGrid::cells_spanned(cell_size, &aabb);
            if cells > MAX_CELLS_PER_OBSTACLE {
                return Err(NavError::InvalidConfig(format!(
                    "collision.broad_phase.cell_size {cell_size} spreads wall {index} over {cells} cells (max {MAX_CELLS_PER_OBSTACLE})"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    pub policy: CollisionPolicy,
    pub broad_phase: BroadPhase,
}

/// Maze geometry and where the player starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub wall_size: Vec3,
    pub walls: Vec<WallSpec>,
    /// Initial eye position
    pub start_position: Vec3,
}

impl Default for MazeConfig {
    fn default() -> Self {
        let reference = MazeLayout::reference();
        Self {
            wall_size: reference.wall_size,
            walls: reference.walls,
            start_position: Vec3::new(0.0, PLAYER_HEIGHT, 0.0),
        }
    }
}

impl MazeConfig {
    /// Walls only, for building the geometry registry.
    pub fn layout(&self) -> MazeLayout {
        MazeLayout {
            wall_size: self.wall_size,
            walls: self.walls.clone(),
        }
    }

    /// No walls, player at the default start.
    pub fn empty() -> Self {
        Self {
            wall_size: WALL_SIZE,
            walls: Vec::new(),
            ..Default::default()
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub player: PlayerConfig,
    pub look: LookConfig,
    pub movement: MovementConfig,
    pub collision: CollisionConfig,
    pub maze: MazeConfig,
}

impl NavConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, NavError> {
        let config: NavConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NavError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, NavError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the core cannot run with.
    ///
    /// Wall sizes are checked later, when the registry is built, so the error
    /// can name the offending wall.
    pub fn validate(&self) -> Result<(), NavError> {
        require_positive("player.height", self.player.height)?;
        require_positive("player.speed", self.player.speed)?;
        require_positive("player.half_width", self.player.half_width)?;
        require_positive("player.half_depth", self.player.half_depth)?;
        require_positive("look.sensitivity", self.look.sensitivity)?;
        require_positive("look.pitch_clamp", self.look.pitch_clamp)?;
        if self.look.pitch_clamp > FRAC_PI_2 {
            return Err(NavError::InvalidConfig(format!(
                "look.pitch_clamp must be at most pi/2, got {}",
                self.look.pitch_clamp
            )));
        }
        if let BroadPhase::Grid { cell_size } = self.collision.broad_phase {
            require_positive("collision.broad_phase.cell_size", cell_size)?;
            // A query box must not straddle more than two cells per axis
            let player_width = 2.0 * self.player.half_width.max(self.player.half_depth);
            if cell_size < player_width {
                return Err(NavError::InvalidConfig(format!(
                    "collision.broad_phase.cell_size must be at least the player width {player_width}, got {cell_size}"
                )));
            }
            let maze = &self.maze;
            self.collision.broad_phase.check_obstacles(
                maze.walls
                    .iter()
                    .map(|wall| Aabb::from_yawed_box(wall.position, maze.wall_size, wall.yaw)),
            )?;
        }
        if !self.maze.start_position.is_finite() {
            return Err(NavError::InvalidConfig(format!(
                "maze.start_position must be finite, got {}",
                self.maze.start_position
            )));
        }
        Ok(())
    }
}

fn require_positive(name: &str, value: f32) -> Result<(), NavError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(NavError::InvalidConfig(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let config = NavConfig::default();
        assert_eq!(config.player.height, 1.8);
        assert_eq!(config.player.speed, 5.0);
        assert_eq!(config.player.half_width, 0.3);
        assert_eq!(config.look.sensitivity, 0.002);
        assert_eq!(config.look.pitch_clamp, FRAC_PI_2);
        assert!(!config.movement.normalize_diagonal);
        assert_eq!(config.collision.policy, CollisionPolicy::Rigid);
        assert_eq!(config.collision.broad_phase, BroadPhase::Linear);
        assert_eq!(config.maze.walls.len(), 6);
        assert_eq!(config.maze.wall_size, Vec3::new(10.0, 3.0, 0.5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = NavConfig::from_json_str("{}").unwrap();
        assert_eq!(config, NavConfig::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let json = r#"{
            "player": { "speed": 7.5 },
            "collision": { "policy": "axis-slide", "broad_phase": { "kind": "grid", "cell_size": 4.0 } },
            "maze": { "walls": [], "start_position": [1.0, 1.8, 2.0] }
        }"#;
        let config = NavConfig::from_json_str(json).unwrap();
        assert_eq!(config.player.speed, 7.5);
        assert_eq!(config.player.height, 1.8);
        assert_eq!(config.collision.policy, CollisionPolicy::AxisSlide);
        assert_eq!(config.collision.broad_phase, BroadPhase::Grid { cell_size: 4.0 });
        assert!(config.maze.walls.is_empty());
        assert_eq!(config.maze.start_position, Vec3::new(1.0, 1.8, 2.0));
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let mut config = NavConfig::default();
        config.player.speed = 0.0;
        assert!(matches!(config.validate(), Err(NavError::InvalidConfig(_))));

        let mut config = NavConfig::default();
        config.look.sensitivity = -0.002;
        assert!(matches!(config.validate(), Err(NavError::InvalidConfig(_))));

        let mut config = NavConfig::default();
        config.collision.broad_phase = BroadPhase::Grid { cell_size: 0.0 };
        assert!(matches!(config.validate(), Err(NavError::InvalidConfig(_))));

        let mut config = NavConfig::default();
        config.look.pitch_clamp = 2.0;
        assert!(matches!(config.validate(), Err(NavError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_tiny_grid_cells() {
        let mut config = NavConfig::default();
        config.collision.broad_phase = BroadPhase::Grid { cell_size: 1.0e-4 };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, NavError::InvalidConfig(ref msg) if msg.contains("player width")));

        // Narrower player, so the lower bound passes but the 10 m walls do not
        config.player.half_width = 1.0e-3;
        config.player.half_depth = 1.0e-3;
        config.collision.broad_phase = BroadPhase::Grid { cell_size: 2.0e-3 };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, NavError::InvalidConfig(ref msg) if msg.contains("wall 0")));

        config.collision.broad_phase = BroadPhase::Grid { cell_size: 0.6 };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_linear_broad_phase_ignores_obstacle_span() {
        let huge = Aabb::new(Vec3::splat(-1.0e6), Vec3::splat(1.0e6));
        assert!(BroadPhase::Linear.check_obstacles([huge]).is_ok());
        assert!(BroadPhase::Grid { cell_size: 1.0 }.check_obstacles([huge]).is_err());
        assert!(BroadPhase::Grid { cell_size: 1.0e5 }.check_obstacles([huge]).is_ok());
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        assert!(matches!(
            NavConfig::from_json_str("{ not json"),
            Err(NavError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            NavConfig::load("/nonexistent/maze_walk.json"),
            Err(NavError::Io(_))
        ));
    }

    #[test]
    fn test_serialized_config_reloads() {
        let mut config = NavConfig::default();
        config.collision.broad_phase = BroadPhase::grid();
        let json = config.to_json_string().unwrap();
        assert_eq!(NavConfig::from_json_str(&json).unwrap(), config);
    }
}
