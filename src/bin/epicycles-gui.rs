//! epicycles-gui - interactive epicycle viewer
//!
//! Left panel: global controls plus one editor per step.
//! Central panel: the rotating arms, their sweep circles and the trace.

use eframe::egui;
use egui::{Color32, Pos2, Stroke};
use epicycles::float_types::Real;
use epicycles::render::RenderState;
use epicycles::{OscillatorStep, Rgba, StepHandle, Visualizer, VisualizerConfig};
use nalgebra::Point2;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting epicycles-gui");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_title("epicycles"),
        ..Default::default()
    };

    eframe::run_native(
        "epicycles",
        options,
        Box::new(|_cc| Ok(Box::new(EpicycleApp::new(VisualizerConfig::from_env())))),
    )
}

fn to_color32(color: Rgba) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

struct EpicycleApp {
    scene: Visualizer,
    paused: bool,
}

impl EpicycleApp {
    fn new(config: VisualizerConfig) -> Self {
        Self {
            scene: Visualizer::from_config(&config),
            paused: false,
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Simulation");
        ui.label(self.scene.clock().time_label());
        ui.label(self.scene.clock().speed_label());

        ui.horizontal(|ui| {
            let label = if self.paused { "▶ Play" } else { "⏸ Pause" };
            if ui.button(label).clicked() {
                self.paused = !self.paused;
            }
        });

        let mut time = self.scene.clock().time();
        if ui.add(egui::DragValue::new(&mut time).speed(0.01).prefix("Time: ")).changed() {
            self.scene.set_time(time);
        }

        let mut speed = self.scene.clock().speed_multiplier();
        if ui.add(egui::Slider::new(&mut speed, 0.0..=10.0).text("Speed")).changed() {
            self.scene.set_speed(speed);
        }

        let mut iterations = self.scene.simulator().iterations() as i64;
        if ui
            .add(egui::Slider::new(&mut iterations, 1..=512).text("Iterations").logarithmic(true))
            .changed()
        {
            self.scene.set_iterations(iterations);
        }

        ui.separator();
        ui.heading("Display");

        let display = *self.scene.display();

        let mut width = display.line_width;
        if ui.add(egui::Slider::new(&mut width, 0.5..=8.0).text("Line width")).changed() {
            self.scene.set_line_width(width);
        }

        let mut circles = display.circles_visible;
        if ui.checkbox(&mut circles, "Circles").changed() {
            self.scene.set_circles_visible(circles);
        }

        let mut arms = display.arms_visible;
        if ui.checkbox(&mut arms, "Arms").changed() {
            self.scene.set_arms_visible(arms);
        }

        ui.separator();
        ui.heading("Trace");

        let mut tracing = self.scene.trace().is_recording();
        if ui.checkbox(&mut tracing, "Record trace").changed() {
            self.scene.set_trace_enabled(tracing);
        }

        let mut clear_on_change = self.scene.clear_on_change();
        if ui.checkbox(&mut clear_on_change, "Clear on change").changed() {
            self.scene.set_clear_on_change(clear_on_change);
        }

        ui.horizontal(|ui| {
            let c = display.trace_color;
            let mut rgba = [c.r, c.g, c.b, c.a];
            if ui.color_edit_button_rgba_unmultiplied(&mut rgba).changed() {
                self.scene
                    .set_trace_color(Rgba::new(rgba[0], rgba[1], rgba[2], rgba[3]));
            }
            ui.label("Trace colour");
        });

        if ui.button("Clear trace").clicked() {
            self.scene.clear_trace();
        }
        ui.label(format!("{} samples", self.scene.trace().len()));

        ui.separator();
        ui.heading("Steps");

        ui.horizontal(|ui| {
            if ui.button("➕ Add").clicked() {
                self.scene.add_step();
            }
            if ui.button("➖ Remove last").clicked() {
                self.scene.remove_last_step();
            }
        });

        let steps: Vec<(StepHandle, OscillatorStep)> =
            self.scene.steps().iter().map(|(h, s)| (h, *s)).collect();

        egui::ScrollArea::vertical().show(ui, |ui| {
            for (i, (handle, step)) in steps.into_iter().enumerate() {
                ui.group(|ui| {
                    ui.label(format!("Step {}", i + 1));
                    self.step_editor(ui, handle, step);
                });
            }
        });
    }

    /// One editor per step: any changed widget rebuilds the whole step and
    /// hands it back to the scene.
    fn step_editor(&mut self, ui: &mut egui::Ui, handle: StepHandle, mut step: OscillatorStep) {
        let mut changed = false;

        changed |= ui
            .add(egui::DragValue::new(&mut step.length).speed(1.0).prefix("Length: "))
            .changed();
        changed |= ui
            .add(egui::DragValue::new(&mut step.offset).speed(0.01).prefix("Offset: "))
            .changed();
        changed |= ui
            .add(egui::DragValue::new(&mut step.speed).speed(0.05).prefix("Speed: "))
            .changed();

        let mut rgba = [step.color.r, step.color.g, step.color.b, step.color.a];
        if ui.color_edit_button_rgba_unmultiplied(&mut rgba).changed() {
            step.color = Rgba::new(rgba[0], rgba[1], rgba[2], rgba[3]);
            changed = true;
        }

        if changed {
            if let Err(error) = self.scene.update_step(handle, step) {
                log::warn!("{error}");
            }
        }
    }
}

fn paint(painter: &egui::Painter, center: Pos2, state: &RenderState) {
    let to_screen = |p: &Point2<Real>| Pos2::new(center.x + p.x as f32, center.y + p.y as f32);

    for arm in &state.arms {
        let stroke = Stroke::new(arm.line_width, to_color32(arm.color));
        if arm.circle_visible {
            let points: Vec<Pos2> = arm.circle.iter().map(to_screen).collect();
            painter.add(egui::Shape::line(points, stroke));
        }
        if arm.direction_visible {
            let [start, end] = &arm.direction;
            painter.line_segment([to_screen(start), to_screen(end)], stroke);
        }
    }

    if state.trace.points.len() >= 2 {
        let points: Vec<Pos2> = state.trace.points.iter().map(to_screen).collect();
        painter.add(egui::Shape::line(
            points,
            Stroke::new(state.trace.line_width, to_color32(state.trace.color)),
        ));
    }
}

impl eframe::App for EpicycleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.paused {
            let delta = ctx.input(|i| i.stable_dt) as Real;
            self.scene.frame(delta);
        }
        ctx.request_repaint();

        egui::SidePanel::left("controls")
            .min_width(240.0)
            .show(ctx, |ui| self.controls(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                paint(&painter, response.rect.center(), &self.scene.render_state());
            });
    }
}
