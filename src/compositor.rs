//! Composition of an oscillator chain into a 2D pose.
//!
//! Every arm is evaluated directly from the absolute simulated time, so a
//! given `(steps, time)` pair always yields the same pose: there is no state
//! carried between calls.
//!
//! ## Angle accumulation
//! ```text
//! θ₀ = speed₀·t + offset₀
//! θᵢ = θᵢ₋₁ + speedᵢ·t + offsetᵢ      (AngleMode::Chained, i ≥ 1)
//! θᵢ = speedᵢ·t + offsetᵢ             (AngleMode::Independent)
//!
//! position₀ = (0, 0)
//! positionᵢ = tipᵢ₋₁
//! tipᵢ      = positionᵢ + lengthᵢ·(cos θᵢ, sin θᵢ)
//! ```
//! `Chained` is the historical behaviour of the visualizer: arm *i*'s angle
//! is relative to arm *i - 1*, so the first arm is the only one whose angle
//! is absolute.

use crate::float_types::Real;
use crate::step::OscillatorStep;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// How angles combine along the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleMode {
    /// Arm *i ≥ 1* adds its own angle to the running angle of the arms before it.
    #[default]
    Chained,
    /// Every arm uses `speed·t + offset` on its own.
    Independent,
}

/// Placement of one arm at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmPose {
    /// Rotation origin: the previous arm's tip, or the origin for the first arm.
    pub position: Point2<Real>,
    /// World rotation in radians.
    pub rotation: Real,
    pub tip: Point2<Real>,
}

impl ArmPose {
    /// Vector from `position` to `tip`.
    pub fn arm(&self) -> Vector2<Real> {
        self.tip - self.position
    }
}

/// Poses of a whole chain, first arm first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainPose {
    pub arms: Vec<ArmPose>,
    /// Tip of the last arm; the point a trace records.
    pub endpoint: Point2<Real>,
}

/// Lazily walks the chain, yielding one pose per step.
pub fn poses(
    steps: &[OscillatorStep],
    time: Real,
    mode: AngleMode,
) -> impl Iterator<Item = ArmPose> + '_ {
    let mut running_angle: Real = 0.0;
    let mut origin: Point2<Real> = Point2::origin();

    steps.iter().enumerate().map(move |(i, step)| {
        running_angle = match mode {
            AngleMode::Chained if i > 0 => running_angle + step.angle_at(time),
            _ => step.angle_at(time),
        };

        let position = origin;
        let tip = position + Vector2::new(running_angle.cos(), running_angle.sin()) * step.length;
        origin = tip;

        ArmPose {
            position,
            rotation: running_angle,
            tip,
        }
    })
}

/// Full chain pose at `time`, or `None` for an empty chain.
pub fn compose(steps: &[OscillatorStep], time: Real, mode: AngleMode) -> Option<ChainPose> {
    let arms: Vec<ArmPose> = poses(steps, time, mode).collect();
    let endpoint = arms.last()?.tip;
    Some(ChainPose { arms, endpoint })
}

/// Only the final tip at `time`, without allocating. `None` for an empty chain.
pub fn endpoint(steps: &[OscillatorStep], time: Real, mode: AngleMode) -> Option<Point2<Real>> {
    poses(steps, time, mode).last().map(|pose| pose.tip)
}
