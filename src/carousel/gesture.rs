//! Gesture Interpretation
//!
//! Turns raw pointer and wheel input into stack rotations:
//! - Swipe: vertical drag > 40 px completed in < 800 ms
//! - Wheel: one rotation per 300 ms window, extra events dropped
//! - Tap latch: a resolved swipe swallows the click it produces

use std::time::{Duration, Instant};

use super::Direction;

/// Minimum vertical travel, in logical pixels, for a drag to count as a swipe.
pub const SWIPE_MIN_DISTANCE: f32 = 40.0;
/// A swipe must complete strictly faster than this.
pub const SWIPE_MAX_DURATION: Duration = Duration::from_millis(800);
/// Minimum spacing between two accepted wheel events.
pub const WHEEL_THROTTLE: Duration = Duration::from_millis(300);

/// Where and when the in-flight gesture started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureStart {
    pub y: f32,
    pub at: Instant,
}

/// Tracks at most one pointer/touch gesture.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    pending: Option<GestureStart>,
    /// Armed by a resolved swipe, consumed by the next tap.
    swallow_tap: bool,
    min_distance: f32,
    max_duration: Duration,
}

impl SwipeTracker {
    pub fn new(min_distance: f32, max_duration: Duration) -> Self {
        Self {
            pending: None,
            swallow_tap: false,
            min_distance,
            max_duration,
        }
    }

    /// Start a gesture. Any unresolved gesture is discarded and the tap
    /// latch is cleared, since a genuine click always begins here.
    pub fn begin(&mut self, y: f32, at: Instant) {
        self.pending = Some(GestureStart { y, at });
        self.swallow_tap = false;
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the in-flight gesture without interpreting it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Resolve the gesture. Upward drags go forward, downward go backward.
    pub fn end(&mut self, y: f32, at: Instant) -> Option<Direction> {
        let start = self.pending.take()?;
        let dy = y - start.y;
        let dt = at.saturating_duration_since(start.at);

        // NaN fails the comparison and falls through as a non-swipe.
        if !(dy.abs() > self.min_distance && dt < self.max_duration) {
            log::trace!("gesture discarded: dy={dy:.1} dt={}ms", dt.as_millis());
            return None;
        }

        self.swallow_tap = true;
        Some(if dy < 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        })
    }

    /// Whether a click on the top card may advance the stack. Returns
    /// false exactly once after a swipe.
    pub fn take_tap(&mut self) -> bool {
        if self.swallow_tap {
            self.swallow_tap = false;
            return false;
        }
        true
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_MIN_DISTANCE, SWIPE_MAX_DURATION)
    }
}

/// Drops wheel events arriving inside the throttle window.
#[derive(Debug, Clone)]
pub struct WheelThrottle {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl WheelThrottle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    /// `delta_y > 0` scrolls down the page, which advances the stack.
    /// Any event outside the window claims it, including a zero or
    /// non-finite delta that then produces no rotation.
    pub fn accept(&mut self, delta_y: f32, now: Instant) -> Option<Direction> {
        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) < self.window {
                return None;
            }
        }
        self.last_accepted = Some(now);
        if delta_y == 0.0 || !delta_y.is_finite() {
            return None;
        }
        Some(if delta_y > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        })
    }
}

impl Default for WheelThrottle {
    fn default() -> Self {
        Self::new(WHEEL_THROTTLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn upward_fast_drag_is_forward() {
        let t0 = Instant::now();
        let mut tracker = SwipeTracker::default();
        tracker.begin(500.0, t0);
        assert!(tracker.is_active());
        assert_eq!(tracker.end(440.0, t0 + ms(200)), Some(Direction::Forward));
        assert!(!tracker.is_active());
    }

    #[test]
    fn downward_fast_drag_is_backward() {
        let t0 = Instant::now();
        let mut tracker = SwipeTracker::default();
        tracker.begin(100.0, t0);
        assert_eq!(tracker.end(180.0, t0 + ms(300)), Some(Direction::Backward));
    }

    #[test]
    fn short_or_slow_drags_are_discarded() {
        let t0 = Instant::now();
        let mut tracker = SwipeTracker::default();

        tracker.begin(500.0, t0);
        assert_eq!(tracker.end(480.0, t0 + ms(200)), None);

        // Exactly 40 px is not enough.
        tracker.begin(500.0, t0);
        assert_eq!(tracker.end(460.0, t0 + ms(200)), None);

        // Exactly 800 ms is too slow.
        tracker.begin(500.0, t0);
        assert_eq!(tracker.end(300.0, t0 + ms(800)), None);
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.end(0.0, Instant::now()), None);
    }

    #[test]
    fn new_gesture_replaces_unresolved_one() {
        let t0 = Instant::now();
        let mut tracker = SwipeTracker::default();
        tracker.begin(900.0, t0);
        tracker.begin(500.0, t0 + ms(1000));
        // Measured from the second press: 50 px up, not 450.
        assert_eq!(tracker.end(450.0, t0 + ms(1100)), Some(Direction::Forward));
        tracker.begin(500.0, t0 + ms(2000));
        tracker.begin(480.0, t0 + ms(2100));
        assert_eq!(tracker.end(450.0, t0 + ms(2200)), None);
    }

    #[test]
    fn swipe_swallows_exactly_one_tap() {
        let t0 = Instant::now();
        let mut tracker = SwipeTracker::default();
        assert!(tracker.take_tap());

        tracker.begin(500.0, t0);
        tracker.end(400.0, t0 + ms(100));
        assert!(!tracker.take_tap());
        assert!(tracker.take_tap());
    }

    #[test]
    fn next_press_disarms_latch() {
        let t0 = Instant::now();
        let mut tracker = SwipeTracker::default();
        tracker.begin(500.0, t0);
        tracker.end(400.0, t0 + ms(100));
        // The swipe ended off the card, so no click consumed the latch.
        tracker.begin(500.0, t0 + ms(2000));
        tracker.end(502.0, t0 + ms(2050));
        assert!(tracker.take_tap());
    }

    #[test]
    fn wheel_throttles_within_window() {
        let t0 = Instant::now();
        let mut wheel = WheelThrottle::default();
        assert_eq!(wheel.accept(120.0, t0), Some(Direction::Forward));
        assert_eq!(wheel.accept(120.0, t0 + ms(100)), None);
        assert_eq!(wheel.accept(120.0, t0 + ms(350)), Some(Direction::Forward));
        assert_eq!(wheel.accept(-3.0, t0 + ms(650)), Some(Direction::Backward));
    }

    #[test]
    fn zero_delta_still_claims_window() {
        let t0 = Instant::now();
        let mut wheel = WheelThrottle::default();
        assert_eq!(wheel.accept(0.0, t0), None);
        assert_eq!(wheel.accept(100.0, t0 + ms(100)), None);
        assert_eq!(wheel.accept(100.0, t0 + ms(300)), Some(Direction::Forward));

        assert_eq!(wheel.accept(f32::NAN, t0 + ms(700)), None);
        assert_eq!(wheel.accept(-1.0, t0 + ms(800)), None);
        assert_eq!(wheel.accept(-1.0, t0 + ms(1000)), Some(Direction::Backward));
    }
}
