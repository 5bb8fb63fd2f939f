//! Keyboard Input Module
//!
//! Movement intent from key presses. Decoupled from winit: the host maps its
//! own key codes onto [`KeyCode`] before calling in.

/// Generic key codes, independent of windowing system.
///
/// Only keys the navigation core reacts to have their own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Control keys
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Movement directions a key can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveDirection {
    /// Fixed key mapping: W/Up, S/Down, A/Left, D/Right.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::W | KeyCode::ArrowUp => Some(Self::Forward),
            KeyCode::S | KeyCode::ArrowDown => Some(Self::Backward),
            KeyCode::A | KeyCode::ArrowLeft => Some(Self::Left),
            KeyCode::D | KeyCode::ArrowRight => Some(Self::Right),
            _ => None,
        }
    }
}

/// The four independent movement-intent flags.
///
/// Set on key-down and cleared on key-up; nothing orders them against each
/// other. Read once per tick by the motion integrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl InputIntent {
    /// All flags released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update intent from a key press or release.
    ///
    /// Returns `true` if the key is a movement key, `false` if it was ignored.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match MoveDirection::from_key(key) {
            Some(direction) => {
                self.set(direction, pressed);
                true
            }
            None => false,
        }
    }

    pub fn set(&mut self, direction: MoveDirection, pressed: bool) {
        match direction {
            MoveDirection::Forward => self.forward = pressed,
            MoveDirection::Backward => self.backward = pressed,
            MoveDirection::Left => self.left = pressed,
            MoveDirection::Right => self.right = pressed,
        }
    }

    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Forward/backward direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Right/left direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_default() {
        let intent = InputIntent::new();
        assert!(!intent.any_pressed());
        assert_eq!(intent.forward_axis(), 0);
        assert_eq!(intent.right_axis(), 0);
    }

    #[test]
    fn test_wasd_and_arrows_share_intents() {
        let mut intent = InputIntent::new();
        assert!(intent.handle_key(KeyCode::ArrowUp, true));
        assert!(intent.forward);
        assert!(intent.handle_key(KeyCode::W, false));
        assert!(!intent.forward);

        intent.handle_key(KeyCode::ArrowLeft, true);
        intent.handle_key(KeyCode::D, true);
        assert!(intent.left && intent.right);
        assert_eq!(intent.right_axis(), 0);
    }

    #[test]
    fn test_axes() {
        let mut intent = InputIntent::new();
        intent.handle_key(KeyCode::S, true);
        assert_eq!(intent.forward_axis(), -1);
        intent.handle_key(KeyCode::D, true);
        assert_eq!(intent.right_axis(), 1);
    }

    #[test]
    fn test_unrecognized_key_is_ignored() {
        let mut intent = InputIntent::new();
        assert!(!intent.handle_key(KeyCode::Escape, true));
        assert!(!intent.handle_key(KeyCode::Unknown, true));
        assert!(!intent.any_pressed());
    }

    #[test]
    fn test_reset() {
        let mut intent = InputIntent::new();
        intent.handle_key(KeyCode::W, true);
        intent.handle_key(KeyCode::A, true);
        intent.reset();
        assert_eq!(intent, InputIntent::default());
    }
}
