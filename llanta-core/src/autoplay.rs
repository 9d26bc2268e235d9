//! Autoplay interval bookkeeping.
//!
//! The host drives a repeating timer; [`Autoplay::fire`] decides whether a
//! tick should advance the wheel. Drags pause autoplay and restart the
//! interval when they end.

use std::time::{Duration, Instant};

use crate::constants::autoplay::TICK_TOLERANCE_MS;

#[derive(Debug, Clone)]
pub struct Autoplay {
    interval: Duration,
    enabled: bool,
    paused: bool,
    last_restart: Instant,
}

impl Autoplay {
    pub fn new(interval: Duration, enabled: bool, now: Instant) -> Self {
        Self {
            interval,
            enabled,
            paused: false,
            last_restart: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Enabled and not held off by a drag.
    pub fn is_armed(&self) -> bool {
        self.enabled && !self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Lift the pause and start a fresh interval.
    pub fn resume(&mut self, now: Instant) {
        self.paused = false;
        self.last_restart = now;
    }

    /// Whether a timer tick at `now` should advance the wheel.
    pub fn fire(&mut self, now: Instant) -> bool {
        if !self.is_armed() {
            return false;
        }
        let elapsed = now.saturating_duration_since(self.last_restart);
        if elapsed + Duration::from_millis(TICK_TOLERANCE_MS) < self.interval {
            return false;
        }
        self.last_restart = now;
        true
    }
}
