//! Navigation Module
//!
//! [`Navigator`] owns everything one player needs to walk a maze: input,
//! player state, the wall registry and its broad-phase index. The host feeds
//! device events into [`Navigator::input_mut`] and calls
//! [`Navigator::apply_frame`] exactly once per rendered frame:
//!
//! ```text
//! take_frame -> candidate yaw/pitch -> compute velocity -> validate -> commit orientation -> resolve -> commit position
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use maze_walk_engine::{KeyCode, NavConfig, Navigator};
//!
//! let mut nav = Navigator::new(NavConfig::default())?;
//! nav.input_mut().request_lock();
//! nav.input_mut().grant_lock();
//! nav.input_mut().handle_key(KeyCode::W, true);
//!
//! let report = nav.apply_frame(1.0 / 60.0)?;
//! let pose = report.pose;
//! ```

use std::sync::Arc;

use glam::Vec3;
use tracing::{debug, trace, warn};

use crate::camera::CameraPose;
use crate::config::{BroadPhase, NavConfig};
use crate::error::NavError;
use crate::input::InputState;
use crate::physics::{Aabb, CollisionPolicy, CollisionResolver, SpatialIndex, UniformGrid};
use crate::player::{MotionIntegrator, PlayerState};
use crate::world::GeometryRegistry;

/// Broad-phase index over the registry's walls, rebuilt when a wall moves.
#[derive(Debug, Clone)]
pub enum WallIndex {
    Linear(Vec<Aabb>),
    Grid(UniformGrid),
}

impl WallIndex {
    pub fn build(broad_phase: BroadPhase, registry: &GeometryRegistry) -> Self {
        match broad_phase {
            BroadPhase::Linear => WallIndex::Linear(registry.aabbs().collect()),
            BroadPhase::Grid { cell_size } => WallIndex::Grid(UniformGrid::new(cell_size, registry.aabbs())),
        }
    }
}

impl SpatialIndex for WallIndex {
    fn first_overlap(&self, query: &Aabb) -> Option<usize> {
        match self {
            WallIndex::Linear(aabbs) => aabbs.first_overlap(query),
            WallIndex::Grid(grid) => grid.first_overlap(query),
        }
    }
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Pose after the tick, for rendering
    pub pose: CameraPose,
    /// Displacement proposed by the motion integrator
    pub velocity: Vec3,
    /// `true` if the proposed displacement was applied in full
    pub fully_applied: bool,
    /// First wall that blocked part of the move
    pub blocked_by: Option<usize>,
    /// Whether input was being consumed this tick
    pub engaged: bool,
}

/// Single-player navigation core.
#[derive(Debug, Clone)]
pub struct Navigator {
    config: NavConfig,
    registry: Arc<GeometryRegistry>,
    index: WallIndex,
    player: PlayerState,
    input: InputState,
    integrator: MotionIntegrator,
    resolver: CollisionResolver,
    frames: u64,
}

impl Navigator {
    /// Validate `config`, build the maze and place the player at the start.
    pub fn new(config: NavConfig) -> Result<Self, NavError> {
        config.validate()?;
        let registry = GeometryRegistry::from_layout(&config.maze.layout())?;
        Self::with_registry(config, Arc::new(registry))
    }

    /// Like [`new`](Self::new), but shares an already-built registry.
    ///
    /// The maze section of `config` is only used for the start position.
    pub fn with_registry(config: NavConfig, registry: Arc<GeometryRegistry>) -> Result<Self, NavError> {
        config.validate()?;
        config.collision.broad_phase.check_obstacles(registry.aabbs())?;

        let mut player = PlayerState::with_position(config.maze.start_position);
        player.height = config.player.height;
        player.half_width = config.player.half_width;
        player.half_depth = config.player.half_depth;
        player.speed = config.player.speed;
        player.set_pitch_limit(config.look.pitch_clamp);

        let index = WallIndex::build(config.collision.broad_phase, &registry);
        if let Some(wall) = index.first_overlap(&player.footprint().aabb_at(player.position)) {
            warn!(wall, position = %player.position, "player starts inside a wall");
        }

        Ok(Self {
            integrator: MotionIntegrator::new(config.movement.normalize_diagonal),
            resolver: CollisionResolver::new(config.collision.policy),
            config,
            registry,
            index,
            player,
            input: InputState::new(),
            frames: 0,
        })
    }

    #[inline]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    #[inline]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Event handlers write here; the tick reads it.
    #[inline]
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    #[inline]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    #[inline]
    pub fn registry(&self) -> &Arc<GeometryRegistry> {
        &self.registry
    }

    #[inline]
    pub fn policy(&self) -> CollisionPolicy {
        self.resolver.policy
    }

    pub fn set_policy(&mut self, policy: CollisionPolicy) {
        self.resolver.policy = policy;
        self.config.collision.policy = policy;
    }

    /// Number of ticks that committed a position.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Current camera pose.
    pub fn pose(&self) -> CameraPose {
        CameraPose::from(&self.player)
    }

    /// Advance one tick of `dt` seconds.
    ///
    /// Everything is validated before anything is committed. A non-finite or
    /// negative `dt`, a non-finite orientation, velocity or position skips
    /// the frame: orientation and position keep their last valid values and
    /// `InvalidState` is returned. Buffered look input for a skipped frame is
    /// dropped.
    pub fn apply_frame(&mut self, dt: f32) -> Result<FrameReport, NavError> {
        let frame = self.input.take_frame();

        if !dt.is_finite() || dt < 0.0 {
            warn!(dt, "skipping frame: invalid dt");
            return Err(NavError::invalid_scalar("dt", dt));
        }

        let (yaw, pitch) = if frame.has_look() {
            self.player
                .looked(frame.look_dx, frame.look_dy, self.config.look.sensitivity)
        } else {
            (self.player.yaw, self.player.pitch())
        };
        if !yaw.is_finite() || !pitch.is_finite() {
            warn!(yaw, pitch, "skipping frame: non-finite orientation");
            return Err(NavError::invalid_vec("orientation", Vec3::new(yaw, pitch, 0.0)));
        }

        let velocity = self
            .integrator
            .integrate(&frame.intent, yaw, self.player.speed, dt);
        if !velocity.is_finite() {
            warn!(%velocity, "skipping frame: non-finite velocity");
            self.player.velocity = Vec3::ZERO;
            return Err(NavError::invalid_vec("velocity", velocity));
        }
        if !self.player.position.is_finite() {
            warn!(position = %self.player.position, "skipping frame: non-finite position");
            return Err(NavError::invalid_vec("position", self.player.position));
        }
        self.player.yaw = yaw;
        self.player.set_pitch(pitch);
        self.player.velocity = velocity;

        let resolution = self.resolver.resolve_detailed(
            self.player.position,
            velocity,
            &self.player.footprint(),
            &self.index,
        );
        if let Some(wall) = resolution.blocked_by {
            debug!(wall, policy = ?self.resolver.policy, %velocity, "move blocked");
        }
        self.player.position = resolution.position;
        self.frames += 1;

        let pose = self.pose();
        trace!(position = %pose.position, yaw = pose.yaw, pitch = pose.pitch, "pose");

        Ok(FrameReport {
            pose,
            velocity,
            fully_applied: resolution.fully_applied,
            blocked_by: resolution.blocked_by,
            engaged: self.input.is_engaged(),
        })
    }

    /// Move the player without collision checks.
    pub fn teleport(&mut self, position: Vec3) -> Result<(), NavError> {
        if !position.is_finite() {
            return Err(NavError::invalid_vec("position", position));
        }
        self.player.position = position;
        self.player.velocity = Vec3::ZERO;
        Ok(())
    }

    /// Replace one wall's transform and rebuild the broad phase.
    ///
    /// Other holders of the registry keep their unchanged copy.
    pub fn update_wall(&mut self, index: usize, position: Vec3, yaw: f32) -> Result<(), NavError> {
        Arc::make_mut(&mut self.registry).update_wall(index, position, yaw)?;
        self.index = WallIndex::build(self.config.collision.broad_phase, &self.registry);
        Ok(())
    }
}
