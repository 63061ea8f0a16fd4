//! Tick timer owned by the game session

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    interval: Duration,
    deadline: Duration,
}

/// A repeating timer driven by an external clock reading.
///
/// Times are offsets from an arbitrary origin (ggez reports time since
/// start). Arming always replaces the previous deadline, so at most one
/// timer is ever live.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TickTimer {
    armed: Option<Armed>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending tick and schedules the next one `interval` from `now`.
    pub fn arm(&mut self, now: Duration, interval: Duration) {
        self.armed = Some(Armed {
            interval,
            deadline: now + interval,
        });
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn interval(&self) -> Option<Duration> {
        self.armed.map(|a| a.interval)
    }

    /// Returns true at most once per call when the deadline has passed.
    /// A timer that fell more than one interval behind skips the missed ticks.
    pub fn poll(&mut self, now: Duration) -> bool {
        let Some(armed) = self.armed.as_mut() else {
            return false;
        };
        if now < armed.deadline {
            return false;
        }
        armed.deadline += armed.interval;
        if armed.deadline <= now {
            armed.deadline = now + armed.interval;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_unarmed_never_fires() {
        let mut timer = TickTimer::new();
        assert!(!timer.poll(ms(10_000)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_fires_each_interval() {
        let mut timer = TickTimer::new();
        timer.arm(ms(0), ms(100));
        assert!(!timer.poll(ms(99)));
        assert!(timer.poll(ms(100)));
        assert!(!timer.poll(ms(150)));
        assert!(timer.poll(ms(205)));
        assert!(timer.poll(ms(300)));
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let mut timer = TickTimer::new();
        timer.arm(ms(0), ms(150));
        timer.arm(ms(100), ms(50));
        assert_eq!(timer.interval(), Some(ms(50)));
        // the old 150ms deadline is gone
        assert!(!timer.poll(ms(140)));
        assert!(timer.poll(ms(150)));
    }

    #[test]
    fn test_cancel() {
        let mut timer = TickTimer::new();
        timer.arm(ms(0), ms(100));
        timer.cancel();
        assert!(!timer.poll(ms(500)));
    }

    #[test]
    fn test_lagging_timer_does_not_burst() {
        let mut timer = TickTimer::new();
        timer.arm(ms(0), ms(100));
        assert!(timer.poll(ms(1_000)));
        assert!(!timer.poll(ms(1_050)));
        assert!(timer.poll(ms(1_100)));
    }
}
