//! The complete epicycle scene and its command surface.
//!
//! A [`Visualizer`] owns the authoritative step list together with all
//! state derived from it. Hosts (a GUI, the wasm bindings, a headless
//! renderer) drive it from a single thread: they call the mutating methods
//! (or [`Visualizer::apply`]) from their input handlers, [`Visualizer::frame`]
//! once per host frame, and read [`Visualizer::render_state`] to draw.
//! Every call completes synchronously; nothing is queued.
//!
//! Hosts keep their own `StepHandle -> widget` tables. The visualizer never
//! holds references into the host.

use crate::clock::SimulationClock;
use crate::color::Rgba;
use crate::compositor::{self, AngleMode, ChainPose};
use crate::config::VisualizerConfig;
use crate::display::DisplaySettings;
use crate::errors::EpicycleError;
use crate::float_types::Real;
use crate::geometry::ArmGeometry;
use crate::render::RenderState;
use crate::simulator::{FrameReport, Simulator};
use crate::step::{OscillatorStep, StepHandle};
use crate::step_list::StepList;
use crate::trace::PathTrace;

/// One input event from the host UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    AddStep,
    RemoveLastStep,
    UpdateStep { handle: StepHandle, step: OscillatorStep },
    SetLineWidth(f32),
    SetCirclesVisible(bool),
    SetArmsVisible(bool),
    /// Enables or disables recording; either way the trace is cleared.
    SetTraceEnabled(bool),
    SetTraceColor(Rgba),
    ClearTrace,
    SetClearOnChange(bool),
    SetTime(Real),
    SetSpeed(Real),
    SetIterations(i64),
    SetAngleMode(AngleMode),
}

#[derive(Debug, Clone)]
pub struct Visualizer {
    steps: StepList,
    // Parallel to `steps`; both only change at the end.
    geometry: Vec<ArmGeometry>,
    display: DisplaySettings,
    clock: SimulationClock,
    trace: PathTrace,
    simulator: Simulator,
    clear_on_change: bool,
}

impl Visualizer {
    /// Default scene: one step of length 100, speed 1.
    pub fn new() -> Self {
        Self::from_config(&VisualizerConfig::default())
    }

    pub fn from_config(config: &VisualizerConfig) -> Self {
        Self::with_steps(config, std::iter::empty())
    }

    /// Scene seeded with `steps` in chain order (or one default step if empty).
    pub fn with_steps<I: IntoIterator<Item = OscillatorStep>>(
        config: &VisualizerConfig,
        steps: I,
    ) -> Self {
        let steps = StepList::from_steps(steps);
        let geometry = steps.as_slice().iter().map(ArmGeometry::from_step).collect();

        let mut trace = PathTrace::with_capacity(config.trace_capacity);
        trace.set_recording(config.trace_enabled);

        Self {
            steps,
            geometry,
            display: config.display,
            clock: SimulationClock::new(config.time, config.speed),
            trace,
            simulator: Simulator::new(config.iterations, config.angle_mode),
            clear_on_change: config.clear_on_change,
        }
    }

    /// Dispatches a host command. Returns the handle of the step that was
    /// added or removed, if any.
    pub fn apply(&mut self, command: Command) -> Result<Option<StepHandle>, EpicycleError> {
        match command {
            Command::AddStep => return Ok(Some(self.add_step())),
            Command::RemoveLastStep => return Ok(self.remove_last_step()),
            Command::UpdateStep { handle, step } => self.update_step(handle, step)?,
            Command::SetLineWidth(width) => self.set_line_width(width),
            Command::SetCirclesVisible(visible) => self.set_circles_visible(visible),
            Command::SetArmsVisible(visible) => self.set_arms_visible(visible),
            Command::SetTraceEnabled(enabled) => self.set_trace_enabled(enabled),
            Command::SetTraceColor(color) => self.set_trace_color(color),
            Command::ClearTrace => self.clear_trace(),
            Command::SetClearOnChange(enabled) => self.set_clear_on_change(enabled),
            Command::SetTime(time) => self.set_time(time),
            Command::SetSpeed(speed) => self.set_speed(speed),
            Command::SetIterations(iterations) => self.set_iterations(iterations),
            Command::SetAngleMode(mode) => self.set_angle_mode(mode),
        }
        Ok(None)
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Step model
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    /// Appends a default step and computes its geometry.
    pub fn add_step(&mut self) -> StepHandle {
        let handle = self.steps.add_step();
        let step = self.steps.as_slice()[self.steps.len() - 1];
        self.geometry.push(ArmGeometry::from_step(&step));
        self.parameters_changed();
        handle
    }

    /// Removes the last step unless it is the only one.
    pub fn remove_last_step(&mut self) -> Option<StepHandle> {
        let removed = self.steps.remove_last_step();
        if removed.is_some() {
            self.geometry.pop();
        }
        removed
    }

    /// Replaces all parameters of one step and refreshes that step's geometry.
    pub fn update_step(
        &mut self,
        handle: StepHandle,
        step: OscillatorStep,
    ) -> Result<(), EpicycleError> {
        self.steps.update_step(handle, step)?;
        if let Some(index) = self.steps.index_of(handle) {
            self.geometry[index] = ArmGeometry::from_step(&step);
        }
        self.parameters_changed();
        Ok(())
    }

    fn parameters_changed(&mut self) {
        if self.clear_on_change {
            self.trace.clear();
        }
    }

    pub fn steps(&self) -> &StepList {
        &self.steps
    }

    pub fn step(&self, handle: StepHandle) -> Option<&OscillatorStep> {
        self.steps.get(handle)
    }

    /// Local-frame geometry of a step, as last recomputed.
    pub fn geometry(&self, handle: StepHandle) -> Option<&ArmGeometry> {
        self.steps.index_of(handle).map(|i| &self.geometry[i])
    }

    /// Static preview of a step at the origin, rotated by its phase offset.
    pub fn editing_geometry(&self, handle: StepHandle) -> Option<ArmGeometry> {
        self.geometry(handle).map(ArmGeometry::at_rest)
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Display
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    pub fn set_line_width(&mut self, width: f32) {
        self.display.set_line_width(width);
    }

    pub fn set_circles_visible(&mut self, visible: bool) {
        self.display.set_circles_visible(visible);
    }

    pub fn set_arms_visible(&mut self, visible: bool) {
        self.display.set_arms_visible(visible);
    }

    pub fn set_trace_color(&mut self, color: Rgba) {
        self.display.set_trace_color(color);
    }

    pub fn display(&self) -> &DisplaySettings {
        &self.display
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Trace
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    pub fn set_trace_enabled(&mut self, enabled: bool) {
        self.trace.set_recording(enabled);
    }

    pub fn clear_trace(&mut self) {
        self.trace.clear();
    }

    pub fn set_clear_on_change(&mut self, enabled: bool) {
        self.clear_on_change = enabled;
    }

    pub const fn clear_on_change(&self) -> bool {
        self.clear_on_change
    }

    pub fn set_trace_capacity(&mut self, capacity: Option<usize>) {
        self.trace.set_capacity(capacity);
    }

    pub fn trace(&self) -> &PathTrace {
        &self.trace
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Simulation
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    pub fn set_time(&mut self, time: Real) {
        self.clock.set_time(time);
    }

    pub fn set_speed(&mut self, speed: Real) {
        self.clock.set_speed_multiplier(speed);
    }

    pub fn set_iterations(&mut self, iterations: i64) {
        self.simulator.set_iterations(iterations);
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        self.simulator.set_angle_mode(mode);
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    /// Runs one host frame of `delta` wall-clock seconds.
    pub fn frame(&mut self, delta: Real) -> FrameReport {
        self.simulator
            .step_frame(self.steps.as_slice(), &mut self.clock, &mut self.trace, delta)
    }

    /// Chain pose at the current simulated time.
    pub fn pose(&self) -> Option<ChainPose> {
        compositor::compose(self.steps.as_slice(), self.clock.time(), self.simulator.angle_mode())
    }

    pub fn render_state(&self) -> RenderState {
        RenderState::build(
            &self.steps,
            &self.geometry,
            &self.display,
            &self.clock,
            &self.trace,
            self.simulator.angle_mode(),
        )
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}
