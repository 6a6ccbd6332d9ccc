//! SVG snapshots of a [`RenderState`].
//!
//! Scene coordinates map directly onto SVG user units (both are y-down);
//! the view box is fitted around everything visible plus a margin.

use crate::color::Rgba;
use crate::float_types::Real;
use crate::io::IoError;
use crate::render::{ArmRender, RenderState};
use nalgebra::Point2;
use std::path::Path;
use svg::Document;
use svg::node::element::{Group, Line, Polyline, Rectangle};

/// Options for [`ToSVG::to_svg_document`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    /// Extra space around the fitted bounds, in scene units.
    pub margin: Real,
    /// Filled behind the scene when set.
    pub background: Option<Rgba>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            margin: 10.0,
            background: Some(Rgba::BLACK),
        }
    }
}

pub trait ToSVG {
    fn to_svg_document(&self, options: &SvgOptions) -> Result<Document, IoError>;

    /// Serialized SVG with default options.
    fn to_svg(&self) -> Result<String, IoError> {
        Ok(self.to_svg_document(&SvgOptions::default())?.to_string())
    }

    fn write_svg<P: AsRef<Path>>(&self, path: P, options: &SvgOptions) -> Result<(), IoError> {
        let document = self.to_svg_document(options)?;
        svg::save(path, &document)?;
        Ok(())
    }
}

impl ToSVG for RenderState {
    fn to_svg_document(&self, options: &SvgOptions) -> Result<Document, IoError> {
        if !options.margin.is_finite() || options.margin < 0.0 {
            return Err(IoError::MalformedInput(format!(
                "margin must be a finite, non-negative number, got {}",
                options.margin
            )));
        }

        let (min, max) = self
            .bounds()
            .unwrap_or((Point2::new(-1.0, -1.0), Point2::new(1.0, 1.0)));
        let x = min.x - options.margin;
        let y = min.y - options.margin;
        let width = (max.x - min.x + 2.0 * options.margin).max(Real::EPSILON);
        let height = (max.y - min.y + 2.0 * options.margin).max(Real::EPSILON);

        let mut document = Document::new().set("viewBox", (x, y, width, height));

        if let Some(background) = options.background {
            document = document.add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", y)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", background.to_hex_rgb())
                    .set("fill-opacity", background.a),
            );
        }

        let mut arms = Group::new().set("id", "arms").set("fill", "none");
        for arm in &self.arms {
            arms = arms.add(arm_group(arm));
        }
        document = document.add(arms);

        if self.trace.points.len() >= 2 {
            document = document.add(
                Polyline::new()
                    .set("id", "trace")
                    .set("points", points_attribute(&self.trace.points))
                    .set("fill", "none")
                    .set("stroke", self.trace.color.to_hex_rgb())
                    .set("stroke-opacity", self.trace.color.a)
                    .set("stroke-width", self.trace.line_width),
            );
        }

        Ok(document)
    }
}

fn arm_group(arm: &ArmRender) -> Group {
    let mut group = Group::new()
        .set("id", format!("step-{}", arm.handle.id()))
        .set("stroke", arm.color.to_hex_rgb())
        .set("stroke-opacity", arm.color.a)
        .set("stroke-width", arm.line_width);

    if arm.circle_visible {
        group = group.add(Polyline::new().set("points", points_attribute(&arm.circle)));
    }
    if arm.direction_visible {
        let [start, end] = arm.direction;
        group = group.add(
            Line::new()
                .set("x1", start.x)
                .set("y1", start.y)
                .set("x2", end.x)
                .set("y2", end.y),
        );
    }
    group
}

fn points_attribute(points: &[Point2<Real>]) -> String {
    points
        .iter()
        .map(|p| format!("{:.4},{:.4}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
