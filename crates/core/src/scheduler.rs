//! Scheduler port - how a session asks for gravity ticks
//!
//! The session never sleeps or owns a clock. It tells a scheduler to fire at
//! an interval (or to stop), and whoever drives the session calls
//! [`Session::tick`](crate::session::Session::tick) when the scheduler fires.

/// Periodic gravity signal controlled by the session
pub trait GravityScheduler {
    /// Start firing every `interval_ms`, replacing any previous schedule
    fn arm(&mut self, interval_ms: u32);

    /// Stop firing
    fn disarm(&mut self);
}

/// Scheduler with no clock: records what the session asked for.
///
/// Drivers that step a session by hand (tests, replays, benchmarks) use this
/// and call `tick()` themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualScheduler {
    armed: Option<u32>,
    arm_count: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interval currently armed, if any
    pub fn armed_interval(&self) -> Option<u32> {
        self.armed
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// How many times `arm` has been called
    pub fn arm_count(&self) -> u32 {
        self.arm_count
    }
}

impl GravityScheduler for ManualScheduler {
    fn arm(&mut self, interval_ms: u32) {
        self.armed = Some(interval_ms);
        self.arm_count += 1;
    }

    fn disarm(&mut self) {
        self.armed = None;
    }
}

impl<S: GravityScheduler + ?Sized> GravityScheduler for &mut S {
    fn arm(&mut self, interval_ms: u32) {
        (**self).arm(interval_ms);
    }

    fn disarm(&mut self) {
        (**self).disarm();
    }
}
