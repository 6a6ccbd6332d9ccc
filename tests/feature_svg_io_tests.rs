#![cfg(feature = "svg-io")]

mod support;

use epicycles::io::IoError;
use epicycles::io::svg::{SvgOptions, ToSVG};
use epicycles::{Visualizer, VisualizerConfig};

fn traced_scene() -> Visualizer {
    let mut scene = Visualizer::with_steps(&VisualizerConfig::default(), support::sample_chain());
    scene.set_trace_enabled(true);
    for _ in 0..10 {
        scene.frame(1.0 / 30.0);
    }
    scene
}

#[test]
fn render_state_to_svg() {
    let svg = traced_scene().render_state().to_svg().unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("viewBox"));
    assert!(svg.contains("id=\"trace\""));
    assert!(svg.contains("id=\"step-0\""));
    assert!(svg.contains("id=\"step-3\""));
    assert!(svg.contains("<line"));
    assert!(svg.contains("<polyline"));
}

#[test]
fn hidden_primitives_are_not_exported() {
    let mut scene = traced_scene();
    scene.set_circles_visible(false);
    scene.set_arms_visible(false);
    scene.set_trace_enabled(false);

    let svg = scene.render_state().to_svg().unwrap();
    assert!(!svg.contains("<line"));
    assert!(!svg.contains("<polyline"));
}

#[test]
fn negative_margin_is_rejected() {
    let state = Visualizer::new().render_state();
    let options = SvgOptions {
        margin: -1.0,
        ..SvgOptions::default()
    };
    assert!(matches!(
        state.to_svg_document(&options),
        Err(IoError::MalformedInput(_))
    ));
}

#[test]
fn write_svg_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_path = std::env::temp_dir().join("epicycles_write_svg_file.svg");

    traced_scene()
        .render_state()
        .write_svg(&tmp_path, &SvgOptions::default())?;

    let contents = std::fs::read_to_string(&tmp_path)?;
    assert!(contents.contains("<svg"));

    let _ = std::fs::remove_file(&tmp_path);
    Ok(())
}
