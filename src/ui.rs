// ui.rs - Controls, warning window and grid canvas

use std::time::Instant;

use eframe::egui;
use egui::{Align2, Color32, FontId, Vec2};

use ant_core::config::{MAX_SPEED, MIN_SPEED};
use ant_core::presets::PRESETS;

use crate::LangtonsAnt;

impl eframe::App for LangtonsAnt {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Step timer: one tick per interval while running and not paused
        if self.engine.is_running()
            && !self.is_paused
            && self.last_update.elapsed() >= self.config.sim.tick_interval
        {
            self.advance();
            self.last_update = Instant::now();
        }

        // Repaint timer: drain whatever the engine reported since last time
        if self.last_repaint.elapsed() >= self.config.sim.repaint_interval {
            self.repaint();
            self.last_repaint = Instant::now();
        }

        egui::SidePanel::right("controls")
            .exact_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Langton's ant");
                ui.separator();

                ui.label("Rules:");
                ui.add(egui::TextEdit::singleline(&mut self.rules_input).hint_text("e.g. RL or LLRR"));

                ui.horizontal(|ui| {
                    egui::ComboBox::from_id_source("preset_selector")
                        .selected_text(PRESETS[self.selected_preset].name)
                        .show_ui(ui, |ui| {
                            for (i, preset) in PRESETS.iter().enumerate() {
                                ui.selectable_value(&mut self.selected_preset, i, preset.name);
                            }
                        });
                    if ui.button("Use preset").clicked() {
                        self.apply_selected_preset();
                    }
                });

                ui.separator();

                ui.horizontal(|ui| {
                    let running = self.engine.is_running();
                    let start_text = if running { "⏹ Stop" } else { "▶ Start" };
                    if ui.button(start_text).clicked() {
                        if running {
                            self.stop_run();
                        } else {
                            self.start_run();
                        }
                    }

                    let pause_text = if self.is_paused { "▶ Resume" } else { "⏸ Pause" };
                    if ui.add_enabled(running, egui::Button::new(pause_text)).clicked() {
                        self.is_paused = !self.is_paused;
                        if !self.is_paused {
                            self.last_update = Instant::now();
                        }
                    }
                });

                ui.label(format!("Steps: {}", self.engine.step_count()));

                ui.separator();

                ui.label("Speed:");
                ui.add(
                    egui::Slider::new(&mut self.speed, MIN_SPEED..=MAX_SPEED)
                        .logarithmic(true)
                        .suffix("×"),
                );

                let mut resolution = self.config.gfx.resolution;
                ui.horizontal(|ui| {
                    ui.label("Cell size:");
                    ui.add(egui::DragValue::new(&mut resolution).clamp_range(1..=40).suffix(" px"));
                });
                if resolution != self.config.gfx.resolution {
                    self.set_resolution(resolution);
                }
                let size = self.canvas.size();
                ui.label(format!("Grid: {}x{}", size.width, size.height));

                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("Gradient:");
                    ui.color_edit_button_srgba(&mut self.start_color);
                    ui.color_edit_button_srgba(&mut self.end_color);
                });
                self.sync_gradient();

                // One swatch per cell state, labelled with the turn it triggers
                let turns = self.engine.rules().map(|r| r.turns()).unwrap_or_default();
                ui.horizontal_wrapped(|ui| {
                    for (state, &color) in self.palette.colors().iter().enumerate() {
                        let (rect, _) = ui.allocate_exact_size(Vec2::splat(18.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 2.0, crate::to_color32(color));
                        if let Some(turn) = turns.get(state) {
                            let luma = 299 * color.r as u32 + 587 * color.g as u32 + 114 * color.b as u32;
                            let text_color = if luma > 128_000 { Color32::BLACK } else { Color32::WHITE };
                            ui.painter().text(
                                rect.center(),
                                Align2::CENTER_CENTER,
                                turn.as_char(),
                                FontId::monospace(12.0),
                                text_color,
                            );
                        }
                    }
                });

                ui.separator();
                ui.label(format!("Painted cells: {}", self.canvas.painted_cells()));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let gfx = &self.config.gfx;
            let total_size = Vec2::new(gfx.canvas_width as f32, gfx.canvas_height as f32);
            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());
            self.canvas.paint(&painter, response.rect, &self.palette);
        });

        if let Some(message) = self.warning.clone() {
            let mut open = true;
            let mut acknowledged = false;
            egui::Window::new("Invalid rules")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.colored_label(Color32::from_rgb(230, 160, 0), "⚠ Warning!");
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }
                });
            if !open || acknowledged {
                self.warning = None;
            }
        }

        // Keep frames coming while the ant is walking
        if self.engine.is_running() && !self.is_paused {
            ctx.request_repaint();
        }
    }
}
