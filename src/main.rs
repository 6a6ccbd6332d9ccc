// main.rs
//
// Headless demo: simulates a few epicycle chains for a couple of seconds
// each and writes SVG snapshots of the arms and the traced path.

use std::fs;

use epicycles::float_types::{PI, Real};
use epicycles::io::svg::{SvgOptions, ToSVG};
use epicycles::{AngleMode, OscillatorStep, Rgba, Visualizer, VisualizerConfig};

const FRAME: Real = 1.0 / 60.0;

fn simulate(name: &str, config: &VisualizerConfig, steps: Vec<OscillatorStep>, seconds: Real) {
    let mut scene = Visualizer::with_steps(config, steps);
    scene.set_trace_enabled(true);

    let frames = (seconds / FRAME).ceil() as usize;
    for _ in 0..frames {
        scene.frame(FRAME);
    }

    let state = scene.render_state();
    log::info!(
        "{name}: {} arms, {} trace samples, {}",
        state.arms.len(),
        state.trace.points.len(),
        state.time_label
    );

    let path = format!("svg/{name}.svg");
    if let Err(error) = state.write_svg(&path, &SvgOptions::default()) {
        log::error!("could not write {path}: {error}");
    }
}

fn main() {
    env_logger::init();

    // Ensure the /svg folder exists
    let _ = fs::create_dir_all("svg");

    let config = VisualizerConfig::from_env();

    // 1) The default single arm: a plain circle of radius 100
    simulate("single_arm", &config, vec![OscillatorStep::default()], 2.0 * PI);

    // 2) Two chained arms: the second arm's angle rides on top of the first
    let two_arms = vec![
        OscillatorStep::new(100.0, 0.0, 1.0, Rgba::from_rgba8(0x4f, 0xc3, 0xf7, 0xff)),
        OscillatorStep::new(50.0, 0.0, 3.0, Rgba::from_rgba8(0xff, 0xb7, 0x4d, 0xff)),
    ];
    simulate("two_arms_chained", &config, two_arms, 2.0 * PI);

    // 3) Square wave: odd harmonics with 1/n amplitudes, evaluated independently
    let independent = VisualizerConfig {
        angle_mode: AngleMode::Independent,
        ..config.clone()
    };
    let square: Vec<OscillatorStep> = (0..8)
        .map(|k| {
            let n = (2 * k + 1) as Real;
            OscillatorStep::new(
                4.0 / (n * PI) * 100.0,
                0.0,
                n,
                Rgba::new(1.0, 1.0 - k as f32 / 8.0, 0.3, 0.8),
            )
        })
        .collect();
    simulate("square_wave", &independent, square, 2.0 * PI);

    // 4) Sawtooth: every harmonic, alternating sign through the phase offset
    let sawtooth: Vec<OscillatorStep> = (1..=10)
        .map(|n| {
            let n_real = n as Real;
            let offset = if n % 2 == 0 { PI } else { 0.0 };
            OscillatorStep::new(2.0 / (n_real * PI) * 100.0, offset, n_real, Rgba::WHITE)
        })
        .collect();
    simulate("sawtooth", &independent, sawtooth, 2.0 * PI);
}
