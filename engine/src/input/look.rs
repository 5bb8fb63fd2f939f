//! Look Delta Accumulator
//!
//! Raw pointer motion buffered between ticks. Handlers only add to the
//! buffer; the tick consumes it once, so orientation changes exactly once per
//! frame regardless of how many motion events arrived.

/// Accumulated pointer motion in device units.
///
/// Sensitivity is applied by the consumer, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LookDelta {
    dx: f32,
    dy: f32,
}

impl LookDelta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one motion event.
    ///
    /// An event is dropped if it is non-finite or would push the running sum
    /// past the `f32` range. Returns `true` if it was kept.
    #[inline]
    pub fn accumulate(&mut self, dx: f32, dy: f32) -> bool {
        let (sum_x, sum_y) = (self.dx + dx, self.dy + dy);
        if !sum_x.is_finite() || !sum_y.is_finite() {
            return false;
        }
        self.dx = sum_x;
        self.dy = sum_y;
        true
    }

    /// Return the accumulated `(dx, dy)` and reset to zero.
    #[inline]
    pub fn consume(&mut self) -> (f32, f32) {
        let delta = (self.dx, self.dy);
        self.clear();
        delta
    }

    /// Current accumulated delta without consuming it.
    #[inline]
    pub fn peek(&self) -> (f32, f32) {
        (self.dx, self.dy)
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_and_consume() {
        let mut look = LookDelta::new();
        look.accumulate(10.0, 5.0);
        look.accumulate(3.0, -2.0);
        assert_eq!(look.peek(), (13.0, 3.0));

        assert_eq!(look.consume(), (13.0, 3.0));
        assert!(look.is_zero());
        assert_eq!(look.consume(), (0.0, 0.0));
    }

    #[test]
    fn test_non_finite_events_are_dropped() {
        let mut look = LookDelta::new();
        look.accumulate(1.0, 1.0);
        look.accumulate(f32::NAN, 2.0);
        look.accumulate(3.0, f32::INFINITY);
        assert_eq!(look.peek(), (1.0, 1.0));
    }

    #[test]
    fn test_overflowing_sum_is_dropped() {
        let mut look = LookDelta::new();
        assert!(look.accumulate(f32::MAX, 0.0));
        assert!(!look.accumulate(f32::MAX, 0.0));
        assert!(look.accumulate(0.0, f32::MIN));
        assert!(!look.accumulate(1.0, f32::MIN));
        assert_eq!(look.peek(), (f32::MAX, f32::MIN));

        assert!(look.accumulate(-f32::MAX, -f32::MIN));
        assert_eq!(look.peek(), (0.0, 0.0));
    }
}
