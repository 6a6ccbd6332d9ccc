//! Frame driver: splits each host frame into equal sub-steps.
//!
//! Sub-stepping only changes how densely the trace samples the trajectory.
//! Positions are evaluated directly from absolute time, so the path itself
//! does not depend on the iteration count.

use crate::clock::SimulationClock;
use crate::compositor::{self, AngleMode};
use crate::float_types::Real;
use crate::step::OscillatorStep;
use crate::trace::PathTrace;
use nalgebra::Point2;

/// Sub-steps per frame unless configured otherwise.
pub const DEFAULT_ITERATIONS: usize = 64;

/// Outcome of one host frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub sub_steps: usize,
    /// Simulated time after the frame.
    pub time: Real,
    pub samples_recorded: usize,
    /// Chain endpoint at the end of the frame, `None` for an empty chain.
    pub endpoint: Option<Point2<Real>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulator {
    iterations: usize,
    angle_mode: AngleMode,
}

impl Simulator {
    /// A zero iteration count is clamped to 1.
    pub fn new(iterations: usize, angle_mode: AngleMode) -> Self {
        if iterations == 0 {
            log::warn!("iteration count 0 clamped to 1");
        }
        Self {
            iterations: iterations.max(1),
            angle_mode,
        }
    }

    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Sets the sub-step count; anything below 1 is clamped to 1.
    pub fn set_iterations(&mut self, iterations: i64) {
        if iterations < 1 {
            log::warn!("iteration count {iterations} clamped to 1");
        }
        self.iterations = iterations.max(1) as usize;
    }

    pub const fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn set_angle_mode(&mut self, angle_mode: AngleMode) {
        self.angle_mode = angle_mode;
    }

    /// Advances `clock` by `delta` of wall-clock time in `iterations` equal
    /// sub-deltas, recording the endpoint into `trace` after each one.
    ///
    /// The clock advances even when `steps` is empty; no samples are taken then.
    pub fn step_frame(
        &self,
        steps: &[OscillatorStep],
        clock: &mut SimulationClock,
        trace: &mut PathTrace,
        delta: Real,
    ) -> FrameReport {
        let sub_delta = delta / self.iterations as Real;
        let mut samples_recorded = 0;
        let mut endpoint = None;

        for i in 0..self.iterations {
            let time = clock.advance(sub_delta);
            let last = i + 1 == self.iterations;

            // Intermediate sub-steps are only worth evaluating when they are recorded.
            if !trace.is_recording() && !last {
                continue;
            }

            endpoint = compositor::endpoint(steps, time, self.angle_mode);
            if let Some(point) = endpoint {
                if trace.record(point) {
                    samples_recorded += 1;
                }
            }
        }

        log::trace!(
            "frame: delta={delta} sub_steps={} time={} samples={samples_recorded}",
            self.iterations,
            clock.time()
        );

        FrameReport {
            sub_steps: self.iterations,
            time: clock.time(),
            samples_recorded,
            endpoint,
        }
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS, AngleMode::default())
    }
}
