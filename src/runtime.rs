//! Wall-clock gravity for the interactive runner.
//!
//! [`IntervalScheduler`] is the [`GravityScheduler`] a real game uses: the
//! session arms and disarms it, and the event loop asks it how long it may
//! block on input and whether a gravity tick is due.

use std::time::{Duration, Instant};

use crate::core::GravityScheduler;

#[derive(Debug, Clone, Default)]
pub struct IntervalScheduler {
    interval: Option<Duration>,
    deadline: Option<Instant>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm with an explicit "now" (tests, replays)
    pub fn arm_at(&mut self, interval_ms: u32, now: Instant) {
        let interval = Duration::from_millis(interval_ms as u64);
        self.interval = Some(interval);
        self.deadline = Some(now + interval);
    }

    pub fn interval_ms(&self) -> Option<u32> {
        self.interval.map(|d| d.as_millis() as u32)
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true if a tick is due at `now` and schedules the following one.
    ///
    /// A loop that fell behind gets a single tick, not a burst of catch-up
    /// ticks; the next deadline is then measured from `now`.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        let (Some(interval), Some(deadline)) = (self.interval, self.deadline) else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let next = deadline + interval;
        self.deadline = Some(if next > now { next } else { now + interval });
        true
    }

    /// How long the caller may wait before the next tick; `None` when disarmed
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl GravityScheduler for IntervalScheduler {
    fn arm(&mut self, interval_ms: u32) {
        self.arm_at(interval_ms, Instant::now());
    }

    fn disarm(&mut self) {
        self.interval = None;
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_disarmed_never_fires() {
        let mut s = IntervalScheduler::new();
        let now = Instant::now();
        assert!(!s.poll_due(now + ms(10_000)));
        assert_eq!(s.time_until_due(now), None);
    }

    #[test]
    fn test_fires_at_deadline_and_reschedules() {
        let mut s = IntervalScheduler::new();
        let t0 = Instant::now();
        s.arm_at(1000, t0);

        assert!(!s.poll_due(t0 + ms(999)));
        assert_eq!(s.time_until_due(t0 + ms(400)), Some(ms(600)));

        assert!(s.poll_due(t0 + ms(1000)));
        assert!(!s.poll_due(t0 + ms(1000)));
        assert_eq!(s.time_until_due(t0 + ms(1000)), Some(ms(1000)));
        assert!(s.poll_due(t0 + ms(2000)));
    }

    #[test]
    fn test_late_poll_does_not_burst() {
        let mut s = IntervalScheduler::new();
        let t0 = Instant::now();
        s.arm_at(100, t0);

        assert!(s.poll_due(t0 + ms(1050)));
        assert!(!s.poll_due(t0 + ms(1100)));
        assert!(s.poll_due(t0 + ms(1150)));
    }

    #[test]
    fn test_rearm_replaces_schedule() {
        let mut s = IntervalScheduler::new();
        let t0 = Instant::now();
        s.arm_at(1000, t0);
        s.arm_at(950, t0 + ms(500));

        assert_eq!(s.interval_ms(), Some(950));
        assert!(!s.poll_due(t0 + ms(1000)));
        assert!(s.poll_due(t0 + ms(1450)));
    }

    #[test]
    fn test_disarm_clears_deadline() {
        let mut s = IntervalScheduler::new();
        let t0 = Instant::now();
        s.arm_at(100, t0);
        s.disarm();

        assert!(!s.is_armed());
        assert_eq!(s.interval_ms(), None);
        assert!(!s.poll_due(t0 + ms(500)));
    }
}
