//! Initial settings of a [`Visualizer`](crate::visualizer::Visualizer).
//!
//! Configuration is process-local: defaults, optionally overridden from
//! environment variables at startup. Nothing is written back.

use crate::compositor::AngleMode;
use crate::display::DisplaySettings;
use crate::errors::EpicycleError;
use crate::float_types::Real;
use crate::simulator::DEFAULT_ITERATIONS;
use serde::{Deserialize, Serialize};

pub const ENV_ITERATIONS: &str = "EPICYCLES_ITERATIONS";
pub const ENV_SPEED: &str = "EPICYCLES_SPEED";
pub const ENV_TRACE_CAPACITY: &str = "EPICYCLES_TRACE_CAPACITY";
pub const ENV_CLEAR_ON_CHANGE: &str = "EPICYCLES_CLEAR_ON_CHANGE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Sub-steps per host frame.
    pub iterations: usize,
    /// Speed multiplier applied to frame deltas.
    pub speed: Real,
    /// Initial simulated time.
    pub time: Real,
    pub trace_enabled: bool,
    /// Clear the trace whenever a step's parameters change.
    pub clear_on_change: bool,
    /// Upper bound on trace samples; `None` keeps everything.
    pub trace_capacity: Option<usize>,
    pub angle_mode: AngleMode,
    pub display: DisplaySettings,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            speed: 1.0,
            time: 0.0,
            trace_enabled: false,
            clear_on_change: false,
            trace_capacity: None,
            angle_mode: AngleMode::Chained,
            display: DisplaySettings::default(),
        }
    }
}

impl VisualizerConfig {
    /// Defaults overridden by any of the `EPICYCLES_*` environment variables.
    /// Values that fail to parse are logged and skipped.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        for key in [ENV_ITERATIONS, ENV_SPEED, ENV_TRACE_CAPACITY, ENV_CLEAR_ON_CHANGE] {
            if let Ok(value) = std::env::var(key) {
                if let Err(error) = config.apply_env_var(key, &value) {
                    log::warn!("ignoring environment override: {error}");
                }
            }
        }
        config
    }

    /// Applies one `EPICYCLES_*` override. Unknown keys are ignored.
    pub fn apply_env_var(&mut self, key: &str, value: &str) -> Result<(), EpicycleError> {
        let invalid = || EpicycleError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        };
        let value_trimmed = value.trim();

        match key {
            ENV_ITERATIONS => {
                self.iterations = value_trimmed.parse().map_err(|_| invalid())?;
            },
            ENV_SPEED => {
                let speed: Real = value_trimmed.parse().map_err(|_| invalid())?;
                if !speed.is_finite() {
                    return Err(invalid());
                }
                self.speed = speed;
            },
            ENV_TRACE_CAPACITY => {
                self.trace_capacity = match value_trimmed {
                    "" | "none" | "unbounded" => None,
                    n => Some(n.parse().map_err(|_| invalid())?),
                };
            },
            ENV_CLEAR_ON_CHANGE => {
                self.clear_on_change = match value_trimmed.to_ascii_lowercase().as_str() {
                    "1" | "true" | "yes" | "on" => true,
                    "0" | "false" | "no" | "off" => false,
                    _ => return Err(invalid()),
                };
            },
            _ => {},
        }
        Ok(())
    }
}
