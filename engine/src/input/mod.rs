//! Input Module
//!
//! Platform-agnostic input for first-person navigation. Event handlers only
//! write into [`InputState`]; the tick loop reads it once per frame through
//! [`InputState::take_frame`]. Player state is never touched from here.
//!
//! # Example
//!
//! ```rust,ignore
//! use maze_walk_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//!
//! // Event handlers
//! input.handle_key(KeyCode::W, true);
//! input.handle_pointer_motion(12.0, -3.0);
//!
//! // Start of tick
//! let frame = input.take_frame();
//! if frame.intent.forward {
//!     // Move forward
//! }
//! ```

pub mod engagement;
pub mod keyboard;
pub mod look;

// Re-export commonly used types at module level
pub use engagement::{EngagementLock, EngagementState, LockAction};
pub use keyboard::{InputIntent, KeyCode, MoveDirection};
pub use look::LookDelta;

/// Everything the tick consumes from input, captured at tick start.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Movement intent; all released while not engaged
    pub intent: InputIntent,
    /// Raw pointer delta since the previous tick
    pub look_dx: f32,
    pub look_dy: f32,
}

impl FrameInput {
    pub fn has_look(&self) -> bool {
        self.look_dx != 0.0 || self.look_dy != 0.0
    }
}

/// Combined input state: intent flags, look buffer, engagement lock.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    intent: InputIntent,
    look: LookDelta,
    lock: EngagementLock,
}

impl InputState {
    /// All keys released, no buffered motion, lock disengaged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release.
    ///
    /// Key state is tracked even while disengaged so held keys are correct on
    /// re-engage. Returns `true` if the key maps to a movement intent.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.intent.handle_key(key, pressed)
    }

    /// Handle relative pointer motion. Ignored unless engaged.
    pub fn handle_pointer_motion(&mut self, dx: f32, dy: f32) {
        if self.lock.is_engaged() {
            self.look.accumulate(dx, dy);
        }
    }

    /// Pointer click: request engagement.
    pub fn request_lock(&mut self) -> LockAction {
        self.lock.request()
    }

    /// Host granted pointer capture.
    pub fn grant_lock(&mut self) -> bool {
        self.lock.grant()
    }

    /// Host refused pointer capture.
    pub fn deny_lock(&mut self) {
        self.lock.deny();
        self.look.clear();
    }

    /// Host revoked pointer capture. Buffered motion is discarded.
    pub fn revoke_lock(&mut self) -> LockAction {
        self.look.clear();
        self.lock.revoke()
    }

    #[inline]
    pub fn lock(&self) -> &EngagementLock {
        &self.lock
    }

    #[inline]
    pub fn is_engaged(&self) -> bool {
        self.lock.is_engaged()
    }

    #[inline]
    pub fn instructions_visible(&self) -> bool {
        self.lock.instructions_visible()
    }

    /// Current intent flags, regardless of engagement.
    #[inline]
    pub fn intent(&self) -> InputIntent {
        self.intent
    }

    /// Buffered look delta without consuming it.
    #[inline]
    pub fn pending_look(&self) -> (f32, f32) {
        self.look.peek()
    }

    /// Consume this tick's input.
    ///
    /// Drains the look buffer. Events arriving after this call belong to the
    /// next tick.
    pub fn take_frame(&mut self) -> FrameInput {
        let (look_dx, look_dy) = self.look.consume();
        let intent = if self.lock.is_engaged() {
            self.intent
        } else {
            InputIntent::default()
        };
        FrameInput {
            intent,
            look_dx,
            look_dy,
        }
    }

    /// Release all keys and drop buffered motion. The lock is left as is.
    pub fn reset(&mut self) {
        self.intent.reset();
        self.look.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engaged() -> InputState {
        let mut input = InputState::new();
        input.request_lock();
        input.grant_lock();
        input
    }

    #[test]
    fn test_input_state_default() {
        let input = InputState::new();
        assert!(!input.is_engaged());
        assert!(input.instructions_visible());
        assert_eq!(input.pending_look(), (0.0, 0.0));
    }

    #[test]
    fn test_look_ignored_while_disengaged() {
        let mut input = InputState::new();
        input.handle_pointer_motion(100.0, 50.0);
        assert_eq!(input.pending_look(), (0.0, 0.0));
        assert!(!input.take_frame().has_look());
    }

    #[test]
    fn test_look_accumulates_while_engaged() {
        let mut input = engaged();
        input.handle_pointer_motion(100.0, 50.0);
        input.handle_pointer_motion(-20.0, 5.0);

        let frame = input.take_frame();
        assert_eq!((frame.look_dx, frame.look_dy), (80.0, 55.0));
        // Consumed exactly once
        assert!(!input.take_frame().has_look());
    }

    #[test]
    fn test_intent_withheld_while_disengaged() {
        let mut input = InputState::new();
        assert!(input.handle_key(KeyCode::W, true));
        assert!(input.intent().forward);
        assert!(!input.take_frame().intent.any_pressed());

        input.request_lock();
        input.grant_lock();
        assert!(input.take_frame().intent.forward);
    }

    #[test]
    fn test_revoke_discards_buffered_look() {
        let mut input = engaged();
        input.handle_pointer_motion(30.0, 0.0);
        assert_eq!(input.revoke_lock(), LockAction::Release);
        assert_eq!(input.pending_look(), (0.0, 0.0));
        assert!(input.instructions_visible());
    }

    #[test]
    fn test_reset_keeps_lock() {
        let mut input = engaged();
        input.handle_key(KeyCode::D, true);
        input.handle_pointer_motion(1.0, 1.0);
        input.reset();
        assert!(input.is_engaged());
        assert!(!input.intent().any_pressed());
        assert_eq!(input.pending_look(), (0.0, 0.0));
    }
}
