//! Search progress simulation.
//!
//! Drives a monotonically increasing completion percentage from 0 to 100
//! with an ease-out curve: linear gains below 30 percent, then increments
//! shrink as the percentage rises.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Percentage below which increments apply at full size.
const EASE_OUT_KNEE: f64 = 30.0;

/// Divisor scale for the decelerating branch. At `percent >= 30` the
/// effective divisor `percent / 20` is at least 1.5, so the step only
/// shrinks from there.
const EASE_OUT_SCALE: f64 = 20.0;

/// Simulated search completion percentage.
///
/// Invariants: the percentage is non-decreasing, stays within [0, 100], and
/// [`advance`](Self::advance) reports completion exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchProgress {
    percent: f64,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Create a fresh progress tracker at 0 percent.
    #[must_use]
    pub fn new() -> Self {
        Self { percent: 0.0 }
    }

    /// Current completion percentage in [0, 100].
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Whether the search has reached 100 percent.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }

    /// Advance the percentage by one tick.
    ///
    /// Returns `true` on the tick that first reaches 100; further calls
    /// leave the value clamped at 100 and return `false`.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.is_complete() {
            return false;
        }

        let increment = rng.gen::<f64>() * 2.0;
        let step = if self.percent < EASE_OUT_KNEE {
            increment
        } else {
            increment / (self.percent / EASE_OUT_SCALE)
        };

        self.percent = (self.percent + step).min(100.0);
        self.is_complete()
    }
}

/// Format elapsed whole seconds as `m:ss`.
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
