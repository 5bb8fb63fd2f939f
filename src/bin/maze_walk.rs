//! Maze Walk
//!
//! Opens a window, feeds keyboard, pointer and focus events into the
//! navigation core, and ticks it once per redraw. Nothing is drawn; the
//! player pose is reported in the window title.
//!
//! Run with: `cargo run --bin maze_walk -- --policy axis-slide`
//!
//! Controls:
//! - Click: capture the pointer
//! - WASD / arrow keys: move
//! - Mouse: look
//! - ESC: release the pointer (close the window to quit)

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode as WinitKey, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowAttributes, WindowId};

use maze_walk_engine::{BroadPhase, CollisionPolicy, KeyCode, LockAction, NavConfig, Navigator};

/// Seconds between window title refreshes
const TITLE_INTERVAL: f32 = 0.25;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    Rigid,
    AxisSlide,
}

impl From<PolicyArg> for CollisionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Rigid => CollisionPolicy::Rigid,
            PolicyArg::AxisSlide => CollisionPolicy::AxisSlide,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "First-person maze navigation with AABB collision")]
struct Args {
    /// JSON configuration file; missing sections use the built-in maze
    #[arg(long)]
    config: Option<PathBuf>,
    /// Collision policy, overriding the config file
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,
    /// Use a uniform grid broad phase with this cell size
    #[arg(long, value_name = "CELL_SIZE")]
    grid: Option<f32>,
}

impl Args {
    fn into_config(self) -> Result<NavConfig> {
        let mut config = match &self.config {
            Some(path) => NavConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => NavConfig::default(),
        };
        if let Some(policy) = self.policy {
            config.collision.policy = policy.into();
        }
        if let Some(cell_size) = self.grid {
            config.collision.broad_phase = BroadPhase::Grid { cell_size };
        }
        config.validate()?;
        Ok(config)
    }
}

fn map_key(key: WinitKey) -> KeyCode {
    match key {
        WinitKey::KeyW => KeyCode::W,
        WinitKey::KeyA => KeyCode::A,
        WinitKey::KeyS => KeyCode::S,
        WinitKey::KeyD => KeyCode::D,
        WinitKey::ArrowUp => KeyCode::ArrowUp,
        WinitKey::ArrowDown => KeyCode::ArrowDown,
        WinitKey::ArrowLeft => KeyCode::ArrowLeft,
        WinitKey::ArrowRight => KeyCode::ArrowRight,
        WinitKey::Escape => KeyCode::Escape,
        _ => KeyCode::Unknown,
    }
}

struct MazeWalkApp {
    window: Option<Arc<Window>>,
    nav: Navigator,
    last_frame: Instant,
    since_title: f32,
}

impl MazeWalkApp {
    fn new(nav: Navigator) -> Self {
        Self {
            window: None,
            nav,
            last_frame: Instant::now(),
            since_title: 0.0,
        }
    }

    /// Click: ask the platform for pointer capture and report the outcome.
    fn engage(&mut self) {
        if self.nav.input_mut().request_lock() != LockAction::Capture {
            return;
        }
        let Some(window) = &self.window else {
            self.nav.input_mut().deny_lock();
            return;
        };

        let grabbed = window.set_cursor_grab(CursorGrabMode::Locked).is_ok()
            || window.set_cursor_grab(CursorGrabMode::Confined).is_ok();
        if grabbed {
            window.set_cursor_visible(false);
            self.nav.input_mut().grant_lock();
        } else {
            self.nav.input_mut().deny_lock();
        }
    }

    /// Esc or focus loss.
    fn disengage(&mut self) {
        if self.nav.input_mut().revoke_lock() == LockAction::Release
            && let Some(window) = &self.window
        {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
        }
    }

    fn update_title(&self) {
        let Some(window) = &self.window else {
            return;
        };
        let input = self.nav.input();
        if input.instructions_visible() {
            window.set_title(&format!("Maze Walk | {}", input.lock().status_message()));
        } else {
            let pose = self.nav.pose();
            window.set_title(&format!(
                "Maze Walk | pos ({:.2}, {:.2}, {:.2}) | yaw {:.2} pitch {:.2} | {:?}",
                pose.position.x,
                pose.position.y,
                pose.position.z,
                pose.yaw,
                pose.pitch,
                self.nav.policy(),
            ));
        }
    }
}

impl ApplicationHandler for MazeWalkApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title("Maze Walk")
                .with_inner_size(PhysicalSize::new(1280, 720));
            match event_loop.create_window(attrs) {
                Ok(window) => {
                    self.window = Some(Arc::new(window));
                    self.last_frame = Instant::now();
                    self.update_title();
                }
                Err(err) => {
                    error!(%err, "failed to create window");
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    let pressed = event.state == ElementState::Pressed;
                    let key = map_key(key);
                    if key == KeyCode::Escape && pressed {
                        self.disengage();
                        return;
                    }
                    self.nav.input_mut().handle_key(key, pressed);
                }
            }
            WindowEvent::MouseInput { state, .. } => {
                if state == ElementState::Pressed {
                    self.engage();
                }
            }
            WindowEvent::Focused(false) => self.disengage(),
            WindowEvent::Resized(size) => {
                debug!(width = size.width, height = size.height, "window resized");
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta_time = now.duration_since(self.last_frame).as_secs_f32();
                self.last_frame = now;

                if let Err(err) = self.nav.apply_frame(delta_time) {
                    debug!(%err, "frame skipped");
                }

                self.since_title += delta_time;
                if self.since_title >= TITLE_INTERVAL {
                    self.since_title = 0.0;
                    self.update_title();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.nav
                .input_mut()
                .handle_pointer_motion(delta.0 as f32, delta.1 as f32);
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Args::parse().into_config()?;
    let nav = Navigator::new(config).context("building the maze")?;
    info!(
        walls = nav.registry().len(),
        policy = ?nav.policy(),
        "maze ready, click the window to play"
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = MazeWalkApp::new(nav);
    event_loop.run_app(&mut app)?;
    Ok(())
}
