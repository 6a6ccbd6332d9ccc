//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use epicycles::{OscillatorStep, Rgba, float_types::Real};
use nalgebra::Point2;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn points_approx_eq(a: &Point2<Real>, b: &Point2<Real>, eps: Real) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}

/// White oscillator with the given parameters.
pub fn step(length: Real, offset: Real, speed: Real) -> OscillatorStep {
    OscillatorStep::new(length, offset, speed, Rgba::WHITE)
}

/// A varied chain used by several tests.
pub fn sample_chain() -> Vec<OscillatorStep> {
    vec![
        step(100.0, 0.0, 1.0),
        step(50.0, 0.5, -2.0),
        step(25.0, -1.0, 3.5),
        step(12.5, 2.0, 0.25),
    ]
}
