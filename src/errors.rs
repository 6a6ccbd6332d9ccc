//! Errors raised by the step model and configuration parsing

use crate::step::StepHandle;

/// Everything that can go wrong while driving a [`Visualizer`](crate::visualizer::Visualizer).
///
/// Removing the last remaining step and composing an empty chain are *not*
/// errors; both are silent no-ops.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EpicycleError {
    /// (UnknownStep) The handle refers to a step that has been removed
    #[error("(UnknownStep) No step is registered under handle {0}")]
    UnknownStep(StepHandle),
    /// (InvalidColor) A colour string could not be parsed as `#rrggbb` or `#rrggbbaa`
    #[error("(InvalidColor) Could not parse colour: {0:?}")]
    InvalidColor(String),
    /// (InvalidConfig) A configuration value could not be parsed for its key
    #[error("(InvalidConfig) Invalid value {value:?} for {key}")]
    InvalidConfig { key: String, value: String },
}
