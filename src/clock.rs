//! Simulated time.

use crate::float_types::Real;
use serde::{Deserialize, Serialize};

/// A single time scalar advanced by `delta * speed_multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationClock {
    time: Real,
    speed_multiplier: Real,
}

impl SimulationClock {
    pub const fn new(time: Real, speed_multiplier: Real) -> Self {
        Self {
            time,
            speed_multiplier,
        }
    }

    pub const fn time(&self) -> Real {
        self.time
    }

    pub const fn speed_multiplier(&self) -> Real {
        self.speed_multiplier
    }

    /// Advances by one (sub-)delta of wall-clock time and returns the new time.
    ///
    /// Negative or non-finite deltas are ignored: the clock never runs
    /// backwards on its own, only through [`set_time`](Self::set_time).
    pub fn advance(&mut self, delta: Real) -> Real {
        if delta.is_finite() && delta > 0.0 {
            self.time += delta * self.speed_multiplier;
        }
        self.time
    }

    /// Jumps to an absolute time. This is a discontinuity, not a rate change.
    pub fn set_time(&mut self, time: Real) {
        log::debug!("time jump {} -> {}", self.time, time);
        self.time = time;
    }

    pub fn set_speed_multiplier(&mut self, speed: Real) {
        self.speed_multiplier = speed;
    }

    /// `Time: 1.234`
    pub fn time_label(&self) -> String {
        format!("Time: {:.3}", self.time)
    }

    /// `Speed: 1.00x`
    pub fn speed_label(&self) -> String {
        format!("Speed: {:.2}x", self.speed_multiplier)
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}
