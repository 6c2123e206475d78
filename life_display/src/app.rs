// app.rs - The eframe application: one engine frame per due repaint, shown as a texture

use std::time::Instant;

use eframe::egui;
use egui::{Color32, ColorImage, Rect, TextureHandle, TextureOptions, Vec2};
use life_engine::patterns::PATTERNS;
use life_engine::{FrameBuffer, InputSnapshot, Simulation};

use crate::config::HostConfig;
use crate::controls::{self, HostCommands};
use crate::pacing::{self, FramePacer, FrameTiming};

pub struct LifeApp {
    simulation: Simulation,
    frame: FrameBuffer,
    texture: Option<TextureHandle>,

    input: InputSnapshot,
    previous_input: InputSnapshot,

    pacer: FramePacer,
    stop_on_cycle: bool,
    paused: bool,
    fullscreen: bool,
    selected_pattern: usize,
    random_seed: u64,
}

impl LifeApp {
    pub fn new(host: &HostConfig, simulation: Simulation) -> Self {
        let surface = simulation.config().surface;
        let refresh_hz = pacing::refresh_hz_or_fallback(host.refresh_hz);
        tracing::info!(refresh_hz, "frame pacing configured");

        Self {
            frame: FrameBuffer::new(surface.width, surface.height),
            simulation,
            texture: None,
            input: InputSnapshot::default(),
            previous_input: InputSnapshot::default(),
            pacer: FramePacer::new(refresh_hz),
            stop_on_cycle: host.stop_on_cycle,
            paused: false,
            fullscreen: false,
            selected_pattern: 0,
            random_seed: 0,
        }
    }

    fn apply_commands(&mut self, ctx: &egui::Context, commands: HostCommands) {
        if commands.quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if commands.toggle_pause {
            self.paused = !self.paused;
            tracing::info!(paused = self.paused, "pause toggled");
        }
        if commands.toggle_fullscreen {
            self.fullscreen = !self.fullscreen;
            self.input.scaling_factor = controls::scaling_for(self.fullscreen);
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.fullscreen));
        }
    }

    /// Run one engine frame and upload the result.
    fn produce_frame(&mut self, ctx: &egui::Context) {
        if self.input.buttons.reset {
            if let Err(err) = self.simulation.reset() {
                tracing::error!(%err, "cannot recarve the grid arena");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
        }

        let was_running = self.previous_input.buttons.run_simulation;
        self.simulation
            .update_and_render(&mut self.frame.surface(), &self.input, &self.previous_input);
        self.input.carry_buttons_into(&mut self.previous_input);

        if self.input.buttons.run_simulation != was_running {
            tracing::info!(running = self.input.buttons.run_simulation, "simulation mode changed");
        }
        if self.stop_on_cycle && self.input.buttons.run_simulation && self.simulation.is_cycling() {
            self.input.buttons.run_simulation = false;
        }

        let image = ColorImage::from_rgba_unmultiplied(
            [self.frame.width(), self.frame.height()],
            &self.frame.to_rgba(),
        );
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => self.texture = Some(ctx.load_texture("life-frame", image, TextureOptions::NEAREST)),
        }
    }

    fn controls_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let state = if self.paused {
                "Paused"
            } else if self.input.buttons.run_simulation {
                "Running"
            } else {
                "Editing"
            };
            ui.label(state);
            ui.separator();
            ui.label(format!("Generation: {}", self.simulation.generation()));
            ui.label(format!("Population: {}", self.simulation.population()));
            ui.label(format!("Speed: x{:.3}", 1.0 / self.input.animation_speed_factor));

            ui.separator();

            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Stamp").clicked() {
                self.stamp_selected();
            }
            if ui.button("Random").clicked() {
                self.random_seed += 1;
                self.simulation.seed_random(self.random_seed);
            }
            if ui.button("Clear").clicked() {
                self.simulation.clear();
            }
        });
        ui.label("Space: run/edit   P: pause   R: reset   +/-: speed   Alt+Enter: fullscreen");
    }

    /// Stamp the selected pattern centered on the grid.
    fn stamp_selected(&mut self) {
        let Some(pattern) = PATTERNS.get(self.selected_pattern) else {
            return;
        };
        let shape = self.simulation.shape();
        let (rows, cols) = pattern.extent();
        let origin = (
            shape.rows.saturating_sub(rows) / 2,
            shape.columns.saturating_sub(cols) / 2,
        );
        self.simulation.clear();
        self.simulation.stamp(pattern, origin);
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls_panel(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let scale = self.input.scaling_factor.get() as f32;
                let size = Vec2::new(self.frame.width() as f32, self.frame.height() as f32) * scale;
                let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());

                let commands = controls::sample(ctx, &mut self.input, response.rect.min);
                self.apply_commands(ctx, commands);

                if !self.paused {
                    let target = self.pacer.target_frame_time(&self.input);
                    match self.pacer.poll(Instant::now(), target) {
                        FrameTiming::Due => {
                            self.produce_frame(ctx);
                            ctx.request_repaint_after(target);
                        }
                        FrameTiming::Wait(remaining) => ctx.request_repaint_after(remaining),
                    }
                }

                if let Some(texture) = &self.texture {
                    let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    painter.image(texture.id(), response.rect, uv, Color32::WHITE);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_engine::{LifeConfig, patterns};

    #[test]
    fn stamp_centers_the_selected_pattern() {
        let simulation = Simulation::new(LifeConfig::default()).unwrap();
        let mut app = LifeApp::new(&HostConfig::default(), simulation);
        app.selected_pattern = PATTERNS
            .iter()
            .position(|p| p.name == "Blinker")
            .unwrap();
        app.stamp_selected();
        assert_eq!(app.simulation.population(), 3);
        assert!(app.simulation.cell(17, 30) && app.simulation.cell(17, 31) && app.simulation.cell(17, 32));
        assert!(patterns::find("Blinker").is_some());
    }
}
