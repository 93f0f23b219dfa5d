use crate::models::Wpm;
use std::time::{Duration, Instant};

/// One-shot pacing timer. Each firing consumes the deadline; nothing fires
/// again until the clock is re-armed, so a rate change only applies from the
/// next arming onward.
#[derive(Debug, Default)]
pub struct PacingClock {
    deadline: Option<Instant>,
}

impl PacingClock {
    /// Replaces any pending deadline with one a full interval from `now`.
    pub fn arm(&mut self, now: Instant, wpm: Wpm) {
        let interval = wpm.interval();
        tracing::trace!(target: "clock", interval_ms = interval.as_millis() as u64, "armed");
        self.deadline = Some(now + interval);
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns true at most once per arming, when the deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
