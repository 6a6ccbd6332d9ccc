//! A single rotating arm of an epicycle chain.

use crate::color::Rgba;
use crate::float_types::Real;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default arm length of a freshly added step, in scene units.
pub const DEFAULT_LENGTH: Real = 100.0;
/// Default phase offset of a freshly added step, in radians.
pub const DEFAULT_OFFSET: Real = 0.0;
/// Default angular speed of a freshly added step, in radians per unit of simulated time.
pub const DEFAULT_SPEED: Real = 1.0;

/// Stable, opaque identity of a step.
///
/// Handles are never reused within one [`StepList`](crate::step_list::StepList),
/// so a handle held by a UI widget goes stale (rather than silently
/// pointing at a different arm) once its step is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StepHandle(pub(crate) u64);

impl StepHandle {
    /// Raw numeric id, e.g. for keying a host-side widget table.
    pub const fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StepHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One oscillator: an arm of `length` rotating at `speed` with phase `offset`.
///
/// Negative lengths are accepted and simply point the arm the opposite way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorStep {
    pub length: Real,
    pub offset: Real,
    pub speed: Real,
    pub color: Rgba,
}

impl OscillatorStep {
    pub const fn new(length: Real, offset: Real, speed: Real, color: Rgba) -> Self {
        Self {
            length,
            offset,
            speed,
            color,
        }
    }

    /// Angle of this arm evaluated directly from absolute time.
    #[inline]
    pub fn angle_at(&self, time: Real) -> Real {
        self.speed * time + self.offset
    }
}

impl Default for OscillatorStep {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, DEFAULT_OFFSET, DEFAULT_SPEED, Rgba::default())
    }
}
