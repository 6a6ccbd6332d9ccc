//! Derived per-arm geometry: the direction segment and the sweep circle.
//!
//! Both primitives live in the arm's local frame (origin at the arm's
//! rotation origin, +x along the arm) and are placed into the world with
//! [`ArmGeometry::placed`] using an [`ArmPose`].

use crate::compositor::ArmPose;
use crate::float_types::{Real, TAU};
use crate::step::OscillatorStep;
use geo::{AffineOps, AffineTransform, Coord, Line, LineString, coord};

/// Number of segments used to approximate an arm's sweep circle.
pub const CIRCLE_SEGMENTS: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct ArmGeometry {
    /// From the local origin to `(length, 0)`.
    pub direction: Line<Real>,
    /// [`CIRCLE_SEGMENTS`] samples plus a closing sample, radius `length`.
    pub circle: LineString<Real>,
    /// Rotation of the arm at rest (its phase offset), used for static editing feedback.
    pub rest_rotation: Real,
}

impl ArmGeometry {
    pub fn from_step(step: &OscillatorStep) -> Self {
        let direction = Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: step.length, y: 0.0 });

        Self {
            direction,
            circle: circle_polyline(step.length),
            rest_rotation: step.offset,
        }
    }

    /// Geometry moved into world coordinates: rotated by `pose.rotation`
    /// and translated to `pose.position`.
    pub fn placed(&self, pose: &ArmPose) -> ArmGeometry {
        let (sin, cos) = pose.rotation.sin_cos();
        let transform = AffineTransform::new(
            cos,
            -sin,
            pose.position.x,
            sin,
            cos,
            pose.position.y,
        );

        ArmGeometry {
            direction: self.direction.affine_transform(&transform),
            circle: self.circle.affine_transform(&transform),
            rest_rotation: self.rest_rotation,
        }
    }

    /// Geometry shown while editing, before any time has been simulated:
    /// arm at the origin, rotated by its phase offset.
    pub fn at_rest(&self) -> ArmGeometry {
        let origin = nalgebra::Point2::origin();
        let rest = ArmPose {
            position: origin,
            rotation: self.rest_rotation,
            tip: origin,
        };
        self.placed(&rest)
    }
}

/// Closed polyline of radius `radius` centred on the origin, starting and
/// ending at angle 0.
pub fn circle_polyline(radius: Real) -> LineString<Real> {
    let mut coords: Vec<Coord<Real>> = (0..CIRCLE_SEGMENTS)
        .map(|i| {
            let theta = (i as Real / CIRCLE_SEGMENTS as Real) * TAU;
            coord! { x: radius * theta.cos(), y: radius * theta.sin() }
        })
        .collect();
    // close it
    coords.push(coord! { x: radius, y: 0.0 });
    LineString::new(coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use approx::assert_relative_eq;

    #[test]
    fn circle_has_closing_sample() {
        let circle = circle_polyline(100.0);
        assert_eq!(circle.0.len(), CIRCLE_SEGMENTS + 1);
        assert_eq!(circle.0.first(), circle.0.last());
        for c in &circle.0 {
            assert_relative_eq!(c.x.hypot(c.y), 100.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn placed_direction_ends_at_pose_tip() {
        let step = OscillatorStep::new(50.0, 0.3, 1.0, Rgba::WHITE);
        let geometry = ArmGeometry::from_step(&step);
        let pose = ArmPose {
            position: nalgebra::Point2::new(10.0, -5.0),
            rotation: 1.2,
            tip: nalgebra::Point2::new(10.0 + 50.0 * (1.2 as Real).cos(), -5.0 + 50.0 * (1.2 as Real).sin()),
        };

        let placed = geometry.placed(&pose);
        assert_relative_eq!(placed.direction.start.x, 10.0, epsilon = 1e-3);
        assert_relative_eq!(placed.direction.start.y, -5.0, epsilon = 1e-3);
        assert_relative_eq!(placed.direction.end.x, pose.tip.x, epsilon = 1e-3);
        assert_relative_eq!(placed.direction.end.y, pose.tip.y, epsilon = 1e-3);
    }
}
