//! Engagement Lock Module
//!
//! Tracks exclusive pointer capture (pointer lock) for first-person control.
//! The host platform owns the real capture; this state machine records what
//! the host has granted so the core knows whether to consume input.
//!
//! ```text
//! Disengaged --request--> Pending --grant--> Engaged
//!     ^                      |                  |
//!     +--------deny----------+                  |
//!     +------------------revoke-----------------+
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use maze_walk_engine::input::{EngagementLock, LockAction};
//!
//! let mut lock = EngagementLock::new();
//!
//! // Click: ask the host to capture the pointer
//! if lock.request() == LockAction::Capture {
//!     match window.set_cursor_grab(CursorGrabMode::Locked) {
//!         Ok(()) => lock.grant(),
//!         Err(_) => lock.deny(),
//!     };
//! }
//!
//! // Esc or focus loss
//! if lock.revoke() == LockAction::Release {
//!     window.set_cursor_visible(true);
//! }
//! ```

use tracing::info;

/// Engagement states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngagementState {
    /// Pointer is free; input is not consumed.
    #[default]
    Disengaged,
    /// Capture requested, waiting for the host.
    Pending,
    /// Pointer captured; look and movement input are consumed.
    Engaged,
}

/// What the host should do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockAction {
    /// No action needed
    None,
    /// Try to capture and hide the pointer
    Capture,
    /// Release and show the pointer
    Release,
}

/// Engagement lock state machine.
///
/// Denial and revocation are always allowed and never touch player state.
#[derive(Debug, Clone, Default)]
pub struct EngagementLock {
    state: EngagementState,
}

impl EngagementLock {
    /// A lock in `Disengaged` state.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> EngagementState {
        self.state
    }

    /// Check if look and movement input should be consumed.
    #[inline]
    pub fn is_engaged(&self) -> bool {
        self.state == EngagementState::Engaged
    }

    /// Whether the "click to play" instructions should be shown.
    ///
    /// True in every state except `Engaged`.
    #[inline]
    pub fn instructions_visible(&self) -> bool {
        !self.is_engaged()
    }

    /// User asked to engage (pointer click).
    ///
    /// Only moves `Disengaged -> Pending`; a click while pending or engaged
    /// does nothing.
    pub fn request(&mut self) -> LockAction {
        if self.state == EngagementState::Disengaged {
            self.transition(EngagementState::Pending);
            LockAction::Capture
        } else {
            LockAction::None
        }
    }

    /// Host granted the capture. Returns `true` if the lock is now engaged.
    ///
    /// A grant without a pending request is ignored.
    pub fn grant(&mut self) -> bool {
        if self.state == EngagementState::Pending {
            self.transition(EngagementState::Engaged);
        }
        self.is_engaged()
    }

    /// Host refused the capture. Leaves the lock `Disengaged`.
    pub fn deny(&mut self) {
        if self.state == EngagementState::Pending {
            self.transition(EngagementState::Disengaged);
        }
    }

    /// Host took the capture away (Esc, focus loss).
    pub fn revoke(&mut self) -> LockAction {
        match self.state {
            EngagementState::Engaged => {
                self.transition(EngagementState::Disengaged);
                LockAction::Release
            }
            EngagementState::Pending => {
                self.transition(EngagementState::Disengaged);
                LockAction::None
            }
            EngagementState::Disengaged => LockAction::None,
        }
    }

    /// Human-readable status for the host's overlay.
    pub fn status_message(&self) -> &'static str {
        match self.state {
            EngagementState::Disengaged => "Click to play. WASD/arrows move, mouse looks, ESC releases.",
            EngagementState::Pending => "Waiting for pointer lock...",
            EngagementState::Engaged => "ESC to release the pointer.",
        }
    }

    fn transition(&mut self, next: EngagementState) {
        info!(from = ?self.state, to = ?next, "engagement lock");
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_disengaged() {
        let lock = EngagementLock::new();
        assert_eq!(lock.state(), EngagementState::Disengaged);
        assert!(!lock.is_engaged());
        assert!(lock.instructions_visible());
    }

    #[test]
    fn test_request_then_grant_engages() {
        let mut lock = EngagementLock::new();
        assert_eq!(lock.request(), LockAction::Capture);
        assert_eq!(lock.state(), EngagementState::Pending);
        assert!(lock.instructions_visible());

        assert!(lock.grant());
        assert_eq!(lock.state(), EngagementState::Engaged);
        assert!(!lock.instructions_visible());

        // Clicking again while engaged does nothing
        assert_eq!(lock.request(), LockAction::None);
    }

    #[test]
    fn test_deny_returns_to_disengaged() {
        let mut lock = EngagementLock::new();
        lock.request();
        lock.deny();
        assert_eq!(lock.state(), EngagementState::Disengaged);
    }

    #[test]
    fn test_grant_without_request_is_ignored() {
        let mut lock = EngagementLock::new();
        assert!(!lock.grant());
        assert_eq!(lock.state(), EngagementState::Disengaged);
    }

    #[test]
    fn test_revoke() {
        let mut lock = EngagementLock::new();
        lock.request();
        lock.grant();
        assert_eq!(lock.revoke(), LockAction::Release);
        assert_eq!(lock.state(), EngagementState::Disengaged);

        // Revoking again is harmless
        assert_eq!(lock.revoke(), LockAction::None);

        // Revoking a pending request also disengages
        lock.request();
        assert_eq!(lock.revoke(), LockAction::None);
        assert_eq!(lock.state(), EngagementState::Disengaged);
    }

    #[test]
    fn test_status_message() {
        let mut lock = EngagementLock::new();
        assert!(lock.status_message().contains("Click"));
        lock.request();
        lock.grant();
        assert!(lock.status_message().contains("ESC"));
    }
}
