//! Presentation state shared by every arm.

use crate::color::Rgba;
use serde::{Deserialize, Serialize};

/// Cross-cutting display toggles, applied uniformly to all steps at render time.
///
/// Per-step colour stays on [`OscillatorStep`](crate::step::OscillatorStep);
/// everything here is global.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Stroke width of both arm segments and length circles.
    pub line_width: f32,
    /// Whether each arm's sweep circle is drawn.
    pub circles_visible: bool,
    /// Whether each arm's direction segment is drawn.
    pub arms_visible: bool,
    pub trace_color: Rgba,
}

impl DisplaySettings {
    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    pub fn set_circles_visible(&mut self, visible: bool) {
        self.circles_visible = visible;
    }

    pub fn set_arms_visible(&mut self, visible: bool) {
        self.arms_visible = visible;
    }

    pub fn set_trace_color(&mut self, color: Rgba) {
        self.trace_color = color;
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            circles_visible: true,
            arms_visible: true,
            trace_color: Rgba::WHITE,
        }
    }
}
