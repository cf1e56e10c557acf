//! Autoplay Timer
//!
//! Frame-driven replacement for a repeating interval timer. The timer is an
//! owned value: pausing drops it, resuming or changing the interval builds a
//! new one anchored at `now`. Holding it in an `Option` means there is never
//! more than one schedule alive.

use std::time::{Duration, Instant};

/// One armed repeating schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTimer {
    period: Duration,
    next_fire: Instant,
}

impl AutoplayTimer {
    /// Arm a timer whose first firing is one full `period` after `now`.
    pub fn start(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_fire: now + period,
        }
    }

    /// Fire at most once. Returns true when the deadline has passed.
    ///
    /// After a stall longer than a whole period the schedule realigns to
    /// `now` instead of replaying every missed tick.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_fire {
            return false;
        }
        let behind = now.duration_since(self.next_fire);
        self.next_fire = if behind >= self.period {
            now + self.period
        } else {
            self.next_fire + self.period
        };
        true
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_fire.saturating_duration_since(now)
    }
}

/// Playing/Paused state plus the timer that exists only while playing.
#[derive(Debug, Clone)]
pub struct Autoplay {
    interval: Duration,
    paused: bool,
    timer: Option<AutoplayTimer>,
}

impl Autoplay {
    /// Starts in the playing state with a fresh timer.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            paused: false,
            timer: Some(AutoplayTimer::start(interval, now)),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether a timer is currently scheduled.
    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Playing → Paused. Cancels the pending countdown. Returns false if
    /// already paused.
    pub fn pause(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.paused = true;
        self.timer = None;
        true
    }

    /// Paused → Playing with a countdown starting at `now`.
    pub fn resume(&mut self, now: Instant) -> bool {
        if !self.paused {
            return false;
        }
        self.paused = false;
        self.timer = Some(AutoplayTimer::start(self.interval, now));
        true
    }

    /// Replaces the interval. While playing, the old schedule is dropped
    /// and a new one starts from `now`.
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        if !self.paused {
            self.timer = Some(AutoplayTimer::start(interval, now));
        }
    }

    /// True when the caller should advance the stack once.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.timer.as_mut() {
            Some(timer) => timer.poll(now),
            None => false,
        }
    }

    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.timer.as_ref().map(|timer| timer.remaining(now))
    }
}
