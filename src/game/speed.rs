//! Tick interval that shrinks as the score grows

use std::time::Duration;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speed {
    interval: Duration,
    initial: Duration,
    step: Duration,
    floor: Duration,
    foods_per_step: u32,
}

impl Speed {
    pub fn new(config: &Config) -> Self {
        Speed {
            interval: config.initial_interval(),
            initial: config.initial_interval(),
            step: Duration::from_millis(config.speed_step_ms),
            floor: Duration::from_millis(config.min_interval_ms),
            foods_per_step: config.foods_per_speed_up,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn reset(&mut self) {
        self.interval = self.initial;
    }

    /// Called when a food is eaten, with the score as it was before the bite.
    /// Every `foods_per_step`-th food shortens the interval by one step, never
    /// below the floor. Returns true if the interval changed.
    pub fn on_food_eaten(&mut self, score_before: u32) -> bool {
        if self.foods_per_step == 0 || (score_before + 1) % self.foods_per_step != 0 {
            return false;
        }
        let next = self.interval.saturating_sub(self.step).max(self.floor);
        let changed = next != self.interval;
        self.interval = next;
        changed
    }
}
