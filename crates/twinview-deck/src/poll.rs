//! Fixed-cadence sampling timer.

use std::time::{Duration, Instant};

/// Decides when the next state sample is due.
#[derive(Debug, Clone)]
pub struct PollTimer {
    interval: Duration,
    last: Option<Instant>,
}

impl PollTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` (and restarts the interval) if a sample is due at `now`.
    /// The first call is always due.
    pub fn due(&mut self, now: Instant) -> bool {
        let due = match self.last {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if due {
            self.last = Some(now);
        }
        due
    }

    /// How long until the next sample is due.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        match self.last {
            None => Duration::ZERO,
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_poll_is_due() {
        let mut timer = PollTimer::new(Duration::from_millis(100));
        assert!(timer.due(Instant::now()));
    }

    #[test]
    fn test_polls_on_interval() {
        let start = Instant::now();
        let mut timer = PollTimer::new(Duration::from_millis(100));
        assert!(timer.due(start));
        assert!(!timer.due(start + Duration::from_millis(50)));
        assert_eq!(
            timer.time_until_next(start + Duration::from_millis(50)),
            Duration::from_millis(50)
        );
        assert!(timer.due(start + Duration::from_millis(100)));
        assert!(!timer.due(start + Duration::from_millis(199)));
        assert!(timer.due(start + Duration::from_millis(200)));
    }
}
