//! Fixed-budget frame pacing

use std::time::{Duration, Instant};

/// Target duration of one frame (~60 Hz)
pub const FRAME_BUDGET: Duration = Duration::from_millis(16);

/// Pads each frame up to a fixed budget by sleeping at the end of it.
#[derive(Debug, Clone)]
pub struct FramePacer {
    budget: Duration,
    start: Instant,
}

impl FramePacer {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            start: Instant::now(),
        }
    }

    /// Mark the start of a frame
    pub fn begin(&mut self) {
        self.start = Instant::now();
    }

    /// Time left in the budget after `elapsed` of work, zero if over budget
    pub fn padding(&self, elapsed: Duration) -> Duration {
        self.budget.saturating_sub(elapsed)
    }

    /// Sleep for whatever is left of the current frame's budget
    pub fn finish(&self) {
        let delay = self.padding(self.start.elapsed());
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(FRAME_BUDGET)
    }
}
