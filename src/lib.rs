//! An **epicycle** (Fourier series) chain simulator: a list of rotating arms,
//! each with its own length, phase offset and angular speed, composed
//! head-to-tail and advanced over simulated time to trace a 2D path.
//!
//! The crate keeps the simulation core free of any UI toolkit. A host feeds
//! input events into a [`Visualizer`] and draws the [`RenderState`] it
//! produces each frame.
//!
//! ```
//! use epicycles::{Visualizer, OscillatorStep, Rgba};
//!
//! let mut scene = Visualizer::new();
//! let second = scene.add_step();
//! scene.update_step(second, OscillatorStep::new(40.0, 0.0, 3.0, Rgba::WHITE)).unwrap();
//! scene.set_trace_enabled(true);
//!
//! let report = scene.frame(1.0 / 60.0);
//! assert_eq!(report.samples_recorded, 64);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: export a `RenderState` as an SVG document
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **wasm**: `wasm-bindgen` bindings for driving a `Visualizer` from JavaScript
//! - **gui**: the `epicycles-gui` desktop viewer (eframe/egui)

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod clock;
pub mod color;
pub mod compositor;
pub mod config;
pub mod display;
pub mod errors;
pub mod float_types;
pub mod geometry;
pub mod io;
pub mod render;
pub mod simulator;
pub mod step;
pub mod step_list;
pub mod trace;
pub mod visualizer;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use color::Rgba;
pub use compositor::{AngleMode, ArmPose, ChainPose};
pub use config::VisualizerConfig;
pub use errors::EpicycleError;
pub use render::RenderState;
pub use step::{OscillatorStep, StepHandle};
pub use visualizer::{Command, Visualizer};
