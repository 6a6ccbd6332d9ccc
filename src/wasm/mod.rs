use crate::color::Rgba;
use crate::compositor::AngleMode;
use crate::config::VisualizerConfig;
use crate::float_types::Real;
use crate::step::{OscillatorStep, StepHandle};
use crate::visualizer::Visualizer;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

fn js_error<E: std::fmt::Display>(context: &str) -> impl FnOnce(E) -> JsValue + '_ {
    move |e| JsValue::from_str(&format!("{context}: {e}"))
}

fn parse_color(color: &str) -> Result<Rgba, JsValue> {
    color.parse::<Rgba>().map_err(js_error("Failed to parse colour"))
}

#[wasm_bindgen]
pub struct VisualizerJs {
    inner: Visualizer,
}

#[wasm_bindgen]
impl VisualizerJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Visualizer::new(),
        }
    }

    /// Build from a plain JS object shaped like `VisualizerConfig`; missing
    /// fields fall back to their defaults.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config: JsValue) -> Result<VisualizerJs, JsValue> {
        let config: VisualizerConfig = if config.is_undefined() || config.is_null() {
            VisualizerConfig::default()
        } else {
            from_value(config).map_err(js_error("Failed to parse config"))?
        };
        Ok(Self {
            inner: Visualizer::from_config(&config),
        })
    }

    /// Returns the new step's handle id.
    #[wasm_bindgen(js_name = addStep)]
    pub fn add_step(&mut self) -> f64 {
        self.inner.add_step().id() as f64
    }

    /// Returns the removed step's handle id, or `undefined` when only one step is left.
    #[wasm_bindgen(js_name = removeLastStep)]
    pub fn remove_last_step(&mut self) -> Option<f64> {
        self.inner.remove_last_step().map(|h| h.id() as f64)
    }

    #[wasm_bindgen(js_name = updateStep)]
    pub fn update_step(
        &mut self,
        handle: f64,
        length: f64,
        offset: f64,
        speed: f64,
        color: &str,
    ) -> Result<(), JsValue> {
        let step = OscillatorStep::new(
            length as Real,
            offset as Real,
            speed as Real,
            parse_color(color)?,
        );
        self.inner
            .update_step(StepHandle(handle as u64), step)
            .map_err(js_error("Failed to update step"))
    }

    #[wasm_bindgen(js_name = stepCount)]
    pub fn step_count(&self) -> usize {
        self.inner.steps().len()
    }

    #[wasm_bindgen(js_name = setLineWidth)]
    pub fn set_line_width(&mut self, width: f32) {
        self.inner.set_line_width(width);
    }

    #[wasm_bindgen(js_name = setCirclesVisible)]
    pub fn set_circles_visible(&mut self, visible: bool) {
        self.inner.set_circles_visible(visible);
    }

    #[wasm_bindgen(js_name = setArmsVisible)]
    pub fn set_arms_visible(&mut self, visible: bool) {
        self.inner.set_arms_visible(visible);
    }

    #[wasm_bindgen(js_name = setTraceEnabled)]
    pub fn set_trace_enabled(&mut self, enabled: bool) {
        self.inner.set_trace_enabled(enabled);
    }

    #[wasm_bindgen(js_name = setTraceColor)]
    pub fn set_trace_color(&mut self, color: &str) -> Result<(), JsValue> {
        self.inner.set_trace_color(parse_color(color)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = clearTrace)]
    pub fn clear_trace(&mut self) {
        self.inner.clear_trace();
    }

    #[wasm_bindgen(js_name = setClearOnChange)]
    pub fn set_clear_on_change(&mut self, enabled: bool) {
        self.inner.set_clear_on_change(enabled);
    }

    #[wasm_bindgen(js_name = setTime)]
    pub fn set_time(&mut self, time: f64) {
        self.inner.set_time(time as Real);
    }

    #[wasm_bindgen(js_name = setSpeed)]
    pub fn set_speed(&mut self, speed: f64) {
        self.inner.set_speed(speed as Real);
    }

    #[wasm_bindgen(js_name = setIterations)]
    pub fn set_iterations(&mut self, iterations: i32) {
        self.inner.set_iterations(iterations as i64);
    }

    /// `true` for independent per-arm angles, `false` for chained accumulation.
    #[wasm_bindgen(js_name = setIndependentAngles)]
    pub fn set_independent_angles(&mut self, independent: bool) {
        let mode = if independent {
            AngleMode::Independent
        } else {
            AngleMode::Chained
        };
        self.inner.set_angle_mode(mode);
    }

    /// Advances one host frame; returns the simulated time afterwards.
    pub fn frame(&mut self, delta: f64) -> f64 {
        self.inner.frame(delta as Real).time as f64
    }

    #[wasm_bindgen(getter)]
    pub fn time(&self) -> f64 {
        self.inner.clock().time() as f64
    }

    /// The full `RenderState` as a plain JS object.
    #[wasm_bindgen(js_name = renderState)]
    pub fn render_state(&self) -> Result<JsValue, JsValue> {
        to_value(&self.inner.render_state()).map_err(js_error("Failed to serialize render state"))
    }

    /// Trace samples flattened to `[x0, y0, x1, y1, ...]`.
    #[wasm_bindgen(js_name = tracePoints)]
    pub fn trace_points(&self) -> Vec<f64> {
        self.inner
            .trace()
            .points()
            .flat_map(|p| [p.x as f64, p.y as f64])
            .collect()
    }
}

impl Default for VisualizerJs {
    fn default() -> Self {
        Self::new()
    }
}
