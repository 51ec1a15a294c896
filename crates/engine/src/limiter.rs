//! Frame-rate limiting.
//!
//! The budget is `1000 / fps` whole milliseconds, like the fixed tick of a
//! game loop. The limiter never sleeps itself; it tells the caller how long
//! is left so input can be polled for exactly that long.

use std::time::Duration;

use tracing::{trace, warn};

#[derive(Debug, Clone)]
pub struct FrameLimiter {
    budget: Duration,
    overruns: u64,
}

impl FrameLimiter {
    /// `fps` of zero is treated as one.
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1) as u64;
        Self {
            budget: Duration::from_millis(1000 / fps),
            overruns: 0,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Frames that took longer than the budget so far.
    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    /// Time left in the budget after a frame that took `elapsed`.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.budget.saturating_sub(elapsed)
    }

    /// Record a finished frame and return the time left to wait.
    pub fn finish_frame(&mut self, elapsed: Duration) -> Duration {
        trace!(elapsed_us = elapsed.as_micros() as u64, "frame rendered");
        if elapsed > self.budget {
            self.overruns += 1;
            if self.overruns == 1 || self.overruns % 100 == 0 {
                warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = self.budget.as_millis() as u64,
                    overruns = self.overruns,
                    "frame exceeded budget"
                );
            }
        }
        self.remaining(elapsed)
    }
}
