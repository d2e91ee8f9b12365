use std::time::{Duration, Instant};

use super::{ComputationHandler, FactorizationHandler};

/// When a [`TimeoutHandler`] aborts.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum Timer {
    /// Aborts after the duration, measured from the creation of the handler.
    SingleTimeout(Duration),
    /// Aborts after the duration, measured from the start of the latest
    /// computation.
    RestartingTimeout(Duration),
    /// Aborts at a fixed point in time.
    FixedEnd(Instant),
}

/// A handler which aborts computations once its time is up.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct TimeoutHandler {
    timer: Timer,
    checkpoint: Instant,
}

impl TimeoutHandler {
    /// Constructs a new handler with the given timer.
    pub fn new(timer: Timer) -> Self {
        Self { timer, checkpoint: Instant::now() }
    }

    /// Constructs a new handler aborting after `timeout`.
    pub fn after(timeout: Duration) -> Self {
        Self::new(Timer::SingleTimeout(timeout))
    }
}

impl ComputationHandler for TimeoutHandler {
    fn started(&mut self) {
        if matches!(self.timer, Timer::RestartingTimeout(_)) {
            self.checkpoint = Instant::now();
        }
    }

    fn aborted(&self) -> bool {
        match self.timer {
            Timer::SingleTimeout(timeout) | Timer::RestartingTimeout(timeout) => self.checkpoint.elapsed() >= timeout,
            Timer::FixedEnd(end) => Instant::now() >= end,
        }
    }
}

impl FactorizationHandler for TimeoutHandler {}
