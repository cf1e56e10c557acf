//! Card Stack Carousel
//!
//! `RotationController` owns the stack order of a fixed item list and every
//! way of changing it:
//! - Autoplay: `forward()` every interval while not hovered
//! - Wheel: throttled to one rotation per 300 ms
//! - Swipe: vertical drag on the stack (up = forward, down = backward)
//! - Tap: click on the top card advances, unless it ends a swipe
//! - Prev/Next: direct `backward()` / `forward()`
//!
//! All state is plain data and every time-dependent call takes `now`, so the
//! render projection is always derived from the latest mutation.

pub mod autoplay;
pub mod gesture;
pub mod order;
pub mod projection;

use std::time::{Duration, Instant};

use crate::config::CarouselConfig;
use autoplay::Autoplay;
use gesture::{SwipeTracker, WheelThrottle};
use order::StackOrder;
use projection::{project, StackCard, StackStyle};

/// Rotation direction of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Top card moves to the back.
    Forward,
    /// Back card moves to the top.
    Backward,
}

/// Carousel state machine over an immutable item list.
#[derive(Debug)]
pub struct RotationController<T> {
    items: Vec<T>,
    order: StackOrder,
    visible: usize,
    style: StackStyle,
    autoplay: Autoplay,
    swipe: SwipeTracker,
    wheel: WheelThrottle,
}

impl<T> RotationController<T> {
    /// Start playing with the identity order.
    pub fn new(items: Vec<T>, config: &CarouselConfig, now: Instant) -> Self {
        let order = StackOrder::identity(items.len());
        log::debug!(
            "carousel: {} items, {} visible, {}ms interval",
            items.len(),
            config.visible,
            config.interval.as_millis()
        );
        Self {
            items,
            order,
            visible: config.visible.max(1),
            style: config.style,
            autoplay: Autoplay::new(config.interval, now),
            swipe: SwipeTracker::new(config.swipe_min_distance, config.swipe_max_duration),
            wheel: WheelThrottle::new(config.wheel_throttle),
        }
    }

    // ── Rotation ─────────────────────────────────────────────────────────────

    /// Top card moves to the back. No-op on an empty stack.
    pub fn forward(&mut self) {
        self.order.rotate_forward();
        log::trace!("carousel forward -> top {:?}", self.order.first());
    }

    /// Back card moves to the top. No-op on an empty stack.
    pub fn backward(&mut self) {
        self.order.rotate_backward();
        log::trace!("carousel backward -> top {:?}", self.order.first());
    }

    pub fn rotate(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => self.forward(),
            Direction::Backward => self.backward(),
        }
    }

    // ── Autoplay ─────────────────────────────────────────────────────────────

    /// Advance once if the autoplay deadline has passed. Call every frame.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.autoplay.poll(now) && !self.is_empty() {
            self.forward();
            return true;
        }
        false
    }

    /// Pointer entered (`true`) or left (`false`) the stack. Only edges act.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if hovered {
            self.hover_enter();
        } else {
            self.hover_leave(now);
        }
    }

    pub fn hover_enter(&mut self) {
        if self.autoplay.pause() {
            log::debug!("carousel paused");
        }
    }

    pub fn hover_leave(&mut self, now: Instant) {
        if self.autoplay.resume(now) {
            log::debug!("carousel resumed");
        }
    }

    pub fn is_paused(&self) -> bool {
        self.autoplay.is_paused()
    }

    /// Replace the autoplay period; a playing stack restarts its countdown.
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.autoplay.set_interval(interval, now);
    }

    pub fn interval(&self) -> Duration {
        self.autoplay.interval()
    }

    /// Time until autoplay fires next, `None` while paused.
    pub fn time_until_next_advance(&self, now: Instant) -> Option<Duration> {
        self.autoplay.time_until_next(now)
    }

    // ── Input ────────────────────────────────────────────────────────────────

    /// Wheel event with page-style sign (positive = scroll down = forward).
    pub fn wheel(&mut self, delta_y: f32, now: Instant) -> Option<Direction> {
        let direction = self.wheel.accept(delta_y, now)?;
        log::debug!("carousel wheel {direction:?}");
        self.rotate(direction);
        Some(direction)
    }

    /// Pointer or touch pressed at vertical coordinate `y`.
    pub fn pointer_down(&mut self, y: f32, now: Instant) {
        self.swipe.begin(y, now);
    }

    /// Whether native scrolling should be suppressed for the current move.
    pub fn pointer_move(&self) -> bool {
        self.swipe.is_active()
    }

    /// Pointer or touch released. Rotates when the gesture is a swipe.
    pub fn pointer_up(&mut self, y: f32, now: Instant) -> Option<Direction> {
        let direction = self.swipe.end(y, now)?;
        log::debug!("carousel swipe {direction:?}");
        self.rotate(direction);
        Some(direction)
    }

    /// Pointer capture lost; the gesture is dropped unresolved.
    pub fn pointer_cancel(&mut self) {
        self.swipe.cancel();
    }

    /// Click on the top card. Returns whether the stack advanced; the click
    /// that ends a swipe does not.
    pub fn tap(&mut self) -> bool {
        if !self.swipe.take_tap() {
            log::trace!("carousel tap swallowed by swipe");
            return false;
        }
        if self.is_empty() {
            return false;
        }
        self.forward();
        true
    }

    // ── Projection ───────────────────────────────────────────────────────────

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn order(&self) -> &StackOrder {
        &self.order
    }

    /// Index of the item on top.
    pub fn current(&self) -> Option<usize> {
        self.order.first()
    }

    pub fn current_item(&self) -> Option<&T> {
        self.current().and_then(|i| self.items.get(i))
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible.max(1);
    }

    /// Cards to draw, top first.
    pub fn visible_cards(&self) -> Vec<StackCard> {
        project(&self.order, self.visible, &self.style)
    }

    /// One flag per item, set only for the item on top.
    pub fn indicators(&self) -> Vec<bool> {
        let current = self.current();
        (0..self.items.len()).map(|i| Some(i) == current).collect()
    }

    /// Screen-reader style status line.
    pub fn announcement(&self) -> Option<String> {
        let current = self.current()?;
        Some(format!(
            "Showing recommendation {} of {}",
            current + 1,
            self.items.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(4200);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn stack(n: usize, t0: Instant) -> RotationController<usize> {
        let config = CarouselConfig::default().with_interval(INTERVAL).with_visible(4);
        RotationController::new((0..n).collect(), &config, t0)
    }

    fn assert_permutation(order: &StackOrder, n: usize) {
        let mut seen = order.to_vec();
        seen.sort_unstable();
        assert_eq!(seen, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn four_item_scenario() {
        let t0 = Instant::now();
        let mut s = stack(4, t0);
        assert_eq!(s.order().to_vec(), vec![0, 1, 2, 3]);
        s.forward();
        assert_eq!(s.order().to_vec(), vec![1, 2, 3, 0]);
        s.backward();
        assert_eq!(s.order().to_vec(), vec![0, 1, 2, 3]);
        for _ in 0..4 {
            s.forward();
        }
        assert_eq!(s.order().to_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn rotation_is_invertible() {
        let t0 = Instant::now();
        let mut s = stack(5, t0);
        s.forward();
        s.forward();
        let before = s.order().clone();
        s.backward();
        s.forward();
        assert_eq!(*s.order(), before);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let t0 = Instant::now();
        for n in 1..=9 {
            let mut s = stack(n, t0);
            s.backward();
            let start = s.order().clone();
            for _ in 0..n {
                s.forward();
            }
            assert_eq!(*s.order(), start, "n = {n}");
        }
    }

    #[test]
    fn tiny_stacks_are_no_ops() {
        let t0 = Instant::now();
        let mut empty = stack(0, t0);
        empty.forward();
        empty.backward();
        assert!(!empty.tap());
        assert_eq!(empty.current(), None);
        assert_eq!(empty.announcement(), None);
        assert!(empty.visible_cards().is_empty());
        assert!(!empty.tick(t0 + INTERVAL));

        let mut single = stack(1, t0);
        single.forward();
        single.backward();
        assert_eq!(single.order().to_vec(), vec![0]);
    }

    #[test]
    fn order_stays_a_permutation() {
        let t0 = Instant::now();
        let mut s = stack(7, t0);
        let mut seed: u32 = 0x2545_f491;
        let mut now = t0;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            now += ms((seed % 400) as u64);
            match seed % 6 {
                0 => s.forward(),
                1 => s.backward(),
                2 => {
                    s.wheel(if seed & 1 == 0 { 10.0 } else { -10.0 }, now);
                }
                3 => s.pointer_down((seed % 800) as f32, now),
                4 => {
                    s.pointer_up((seed % 800) as f32, now);
                    s.tap();
                }
                _ => {
                    s.tick(now);
                }
            }
            assert_permutation(s.order(), 7);
        }
    }

    #[test]
    fn autoplay_fires_once_per_interval() {
        let t0 = Instant::now();
        let mut s = stack(4, t0);
        assert!(!s.tick(t0 + ms(4199)));
        assert_eq!(s.current(), Some(0));
        assert!(s.tick(t0 + INTERVAL));
        assert_eq!(s.order().to_vec(), vec![1, 2, 3, 0]);
        assert!(!s.tick(t0 + INTERVAL + ms(10)));
    }

    #[test]
    fn pause_then_resume_restarts_countdown() {
        let t0 = Instant::now();
        let mut s = stack(4, t0);
        s.set_hovered(true, t0 + ms(3000));
        assert!(s.is_paused());
        assert_eq!(s.time_until_next_advance(t0 + ms(3000)), None);
        assert!(!s.tick(t0 + ms(9000)));

        let resumed = t0 + ms(10_000);
        s.set_hovered(false, resumed);
        assert!(!s.is_paused());
        assert!(!s.tick(resumed + ms(1200)));
        assert!(!s.tick(resumed + ms(4199)));
        assert!(s.tick(resumed + INTERVAL));
        assert_eq!(s.current(), Some(1));
    }

    #[test]
    fn repeated_hover_does_not_reset_countdown() {
        let t0 = Instant::now();
        let mut s = stack(4, t0);
        s.set_hovered(false, t0 + ms(2000));
        assert_eq!(s.time_until_next_advance(t0 + ms(2000)), Some(ms(2200)));
    }

    #[test]
    fn manual_navigation_works_while_paused() {
        let t0 = Instant::now();
        let mut s = stack(4, t0);
        s.hover_enter();
        s.forward();
        assert_eq!(s.current(), Some(1));
        assert_eq!(s.wheel(-1.0, t0), Some(Direction::Backward));
        assert_eq!(s.current(), Some(0));
    }

    #[test]
    fn interval_change_leaves_no_stale_timer() {
        let t0 = Instant::now();
        let mut s = stack(4, t0);
        s.set_interval(ms(10_000), t0 + ms(4000));
        assert!(!s.tick(t0 + INTERVAL));
        assert!(!s.tick(t0 + ms(13_999)));
        assert!(s.tick(t0 + ms(14_000)));
        assert_eq!(s.current(), Some(1));
    }

    #[test]
    fn wheel_scenario() {
        let t0 = Instant::now();
        let mut s = stack(4, t0);
        assert_eq!(s.wheel(100.0, t0), Some(Direction::Forward));
        assert_eq!(s.wheel(100.0, t0 + ms(100)), None);
        assert_eq!(s.wheel(100.0, t0 + ms(350)), Some(Direction::Forward));
        assert_eq!(s.current(), Some(2));
        assert_eq!(s.wheel(0.0, t0 + ms(900)), None);
        assert_eq!(s.current(), Some(2));
        // The empty event above opened a fresh window.
        assert_eq!(s.wheel(100.0, t0 + ms(1000)), None);
        assert_eq!(s.wheel(100.0, t0 + ms(1200)), Some(Direction::Forward));
        assert_eq!(s.current(), Some(3));
    }

    #[test]
    fn swipe_scenario() {
        let t0 = Instant::now();
        let mut s = stack(4, t0);
        s.pointer_down(500.0, t0);
        assert!(s.pointer_move());
        assert_eq!(s.pointer_up(440.0, t0 + ms(200)), Some(Direction::Forward));
        assert_eq!(s.order().to_vec(), vec![1, 2, 3, 0]);
        assert!(!s.pointer_move());

        s.pointer_down(500.0, t0 + ms(1000));
        assert_eq!(s.pointer_up(480.0, t0 + ms(1200)), None);
        assert_eq!(s.current(), Some(1));

        s.pointer_down(100.0, t0 + ms(2000));
        assert_eq!(s.pointer_up(200.0, t0 + ms(2300)), Some(Direction::Backward));
        assert_eq!(s.current(), Some(0));
    }

    #[test]
    fn cancelled_gesture_never_resolves() {
        let t0 = Instant::now();
        let mut s = stack(4, t0);
        s.pointer_down(500.0, t0);
        s.pointer_cancel();
        assert_eq!(s.pointer_up(100.0, t0 + ms(100)), None);
        assert_eq!(s.current(), Some(0));
    }

    #[test]
    fn swipe_ending_on_card_rotates_once() {
        let t0 = Instant::now();
        let mut s = stack(4, t0);
        s.pointer_down(500.0, t0);
        s.pointer_up(430.0, t0 + ms(150));
        // Same gesture also reports a click on the top card.
        assert!(!s.tap());
        assert_eq!(s.current(), Some(1));

        // A plain click afterwards advances normally.
        s.pointer_down(300.0, t0 + ms(1000));
        s.pointer_up(301.0, t0 + ms(1080));
        assert!(s.tap());
        assert_eq!(s.current(), Some(2));
    }

    #[test]
    fn projection_tracks_every_rotation() {
        let t0 = Instant::now();
        let mut s = stack(6, t0);
        s.tick(t0 + INTERVAL);
        let cards = s.visible_cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(Some(cards[0].item), s.current());
        assert_eq!(
            s.indicators(),
            vec![false, true, false, false, false, false]
        );
        assert_eq!(
            s.announcement().as_deref(),
            Some("Showing recommendation 2 of 6")
        );
        assert_eq!(s.current_item(), Some(&1));
    }

    #[test]
    fn visible_is_clamped_to_one() {
        let t0 = Instant::now();
        let config = CarouselConfig::default().with_visible(0);
        let mut s = RotationController::new(vec!["a", "b"], &config, t0);
        assert_eq!(s.visible_cards().len(), 1);
        s.set_visible(9);
        assert_eq!(s.visible_cards().len(), 2);
    }
}
