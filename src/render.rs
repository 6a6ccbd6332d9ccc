//! Per-frame output handed to whatever draws the scene.

use crate::clock::SimulationClock;
use crate::color::Rgba;
use crate::compositor::{self, AngleMode};
use crate::display::DisplaySettings;
use crate::float_types::Real;
use crate::geometry::ArmGeometry;
use crate::step::StepHandle;
use crate::step_list::StepList;
use crate::trace::PathTrace;
use nalgebra::Point2;
use serde::Serialize;

/// Everything needed to draw one arm: its pose plus both primitives in world space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArmRender {
    pub handle: StepHandle,
    pub label: String,
    pub position: Point2<Real>,
    pub rotation: Real,
    pub tip: Point2<Real>,
    pub color: Rgba,
    pub line_width: f32,
    pub direction_visible: bool,
    pub circle_visible: bool,
    /// `[position, tip]`
    pub direction: [Point2<Real>; 2],
    /// Sweep circle around `position`, closed.
    pub circle: Vec<Point2<Real>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceRender {
    pub points: Vec<Point2<Real>>,
    pub color: Rgba,
    pub line_width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderState {
    pub arms: Vec<ArmRender>,
    pub trace: TraceRender,
    pub time: Real,
    pub speed: Real,
    /// `Time: 0.000`
    pub time_label: String,
    /// `Speed: 1.00x`
    pub speed_label: String,
}

impl RenderState {
    /// Poses the chain at the clock's current time and places each arm's
    /// cached geometry accordingly. `geometry` is parallel to `steps`.
    pub fn build(
        steps: &StepList,
        geometry: &[ArmGeometry],
        display: &DisplaySettings,
        clock: &SimulationClock,
        trace: &PathTrace,
        angle_mode: AngleMode,
    ) -> Self {
        let arms = compositor::poses(steps.as_slice(), clock.time(), angle_mode)
            .zip(steps.iter())
            .zip(geometry)
            .enumerate()
            .map(|(i, ((pose, (handle, step)), local))| {
                let placed = local.placed(&pose);
                let to_point = |c: geo::Coord<Real>| Point2::new(c.x, c.y);

                ArmRender {
                    handle,
                    label: format!("Step {}", i + 1),
                    position: pose.position,
                    rotation: pose.rotation,
                    tip: pose.tip,
                    color: step.color,
                    line_width: display.line_width,
                    direction_visible: display.arms_visible,
                    circle_visible: display.circles_visible,
                    direction: [to_point(placed.direction.start), to_point(placed.direction.end)],
                    circle: placed.circle.0.into_iter().map(to_point).collect(),
                }
            })
            .collect();

        Self {
            arms,
            trace: TraceRender {
                points: trace.points().copied().collect(),
                color: display.trace_color,
                line_width: display.line_width,
            },
            time: clock.time(),
            speed: clock.speed_multiplier(),
            time_label: clock.time_label(),
            speed_label: clock.speed_label(),
        }
    }

    /// Axis-aligned bounds `(min, max)` of every visible primitive and the trace.
    pub fn bounds(&self) -> Option<(Point2<Real>, Point2<Real>)> {
        let arm_points = self.arms.iter().flat_map(|arm| {
            let direction: &[Point2<Real>] = if arm.direction_visible { &arm.direction } else { &[] };
            let circle: &[Point2<Real>] = if arm.circle_visible { &arm.circle } else { &[] };
            direction.iter().chain(circle.iter())
        });

        let mut all = arm_points.chain(self.trace.points.iter());
        let first = *all.next()?;

        let (min, max) = all.fold((first, first), |(min, max), p| {
            (
                Point2::new(min.x.min(p.x), min.y.min(p.y)),
                Point2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some((min, max))
    }
}
