// ui.rs - eframe front end: controls, drawing surface, dialogs

use eframe::egui;
use egui::{Align2, Key, Response, Vec2};

use crate::app::{ConwayApp, PromptKind};
use crate::render;
use crate::ticker::Tick;

impl eframe::App for ConwayApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Frame gate: advance only when a full interval has passed.
        let now_ms = ctx.input(|i| i.time) * 1000.0;
        match self.frame_tick(now_ms) {
            Tick::Fire => ctx.request_repaint_after(self.sim.interval()),
            Tick::Wait(remaining) => ctx.request_repaint_after(remaining),
            Tick::Idle => {}
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            // Dialogs block the controls and the surface until dismissed.
            let enabled = !self.is_modal();
            ui.add_enabled_ui(enabled, |ui| {
                ui.heading("Conway's Game of Life");

                // Controls
                ui.horizontal(|ui| {
                    let running = self.sim.is_running();
                    let start = ui.add_enabled(!running, egui::Button::new("▶ Start"));
                    if start.clicked() && self.sim.start() {
                        ctx.request_repaint();
                    }
                    if ui.add_enabled(running, egui::Button::new("⏸ Pause")).clicked() {
                        self.sim.pause();
                    }
                    if ui.add_enabled(!running, egui::Button::new("⏭ Step")).clicked() {
                        self.sim.step();
                    }
                    if ui.button("⏹ Clear").clicked() {
                        self.brush.release();
                        self.sim.clear();
                    }
                    if ui.button("🎲 Random").clicked() {
                        self.sim.randomize(&mut rand::thread_rng());
                    }

                    ui.separator();

                    if ui.button("💾 Save").clicked() {
                        self.open_prompt(PromptKind::Save);
                    }
                    if ui.button("📂 Load").clicked() {
                        self.open_prompt(PromptKind::Load);
                    }

                    ui.separator();

                    ui.label(format!("Generation: {}", self.sim.generation()));
                });

                ui.separator();

                // Speed and colors
                ui.horizontal(|ui| {
                    ui.label("Speed:");
                    let mut speed = self.sim.speed();
                    let slider =
                        egui::Slider::new(&mut speed, self.sim.speed_range()).suffix(" gen/sec");
                    if ui.add(slider).changed() {
                        self.sim.set_speed(speed);
                    }

                    ui.separator();

                    ui.label("Live:");
                    ui.color_edit_button_srgb(&mut self.live_color);
                    ui.label("Dead:");
                    ui.color_edit_button_srgb(&mut self.dead_color);
                });

                ui.separator();

                ui.label("Press and drag over the grid to toggle cells.");

                // Drawing surface
                let resolution = self.resolution();
                let size = render::surface_size(self.sim.grid(), resolution);
                let (response, painter) =
                    ui.allocate_painter(size, egui::Sense::click_and_drag());
                self.handle_pointer(ui, &response);
                let origin = response.rect.min;
                let palette = self.palette();
                render::paint_grid(&painter, origin, self.sim.grid(), resolution, &palette);

                ui.separator();

                let total = self.sim.grid().columns() * self.sim.grid().rows();
                let live = self.sim.grid().population();
                ui.horizontal(|ui| {
                    ui.label(format!("Live cells: {live}"));
                    ui.label(format!("Dead cells: {}", total - live));
                    ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
                });
            });
        });

        self.show_prompt(ctx, frame);
        self.show_notice(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings());
    }
}

impl ConwayApp {
    fn handle_pointer(&mut self, ui: &egui::Ui, response: &Response) {
        if self.is_modal() {
            self.brush.release();
            return;
        }

        let (pressed, down, pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.interact_pos(),
            )
        });
        let resolution = self.resolution();

        match pos.filter(|p| response.rect.contains(*p)) {
            Some(p) => {
                let local = p - response.rect.min;
                if pressed && response.hovered() {
                    self.brush.press(&mut self.sim, local.x, local.y, resolution);
                } else if down {
                    self.brush.drag(&mut self.sim, local.x, local.y, resolution);
                }
            }
            None if self.brush.is_drawing() => self.brush.leave(),
            None => {}
        }

        if !down {
            self.brush.release();
        }
    }

    fn show_prompt(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };

        let mut submit = false;
        let mut cancel = ctx.input(|i| i.key_pressed(Key::Escape));

        egui::Window::new(prompt.kind.title())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(prompt.kind.message());
                let edit = ui.text_edit_singleline(&mut prompt.name);
                if !prompt.focused {
                    edit.request_focus();
                    prompt.focused = true;
                }
                if edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    submit = true;
                }
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if cancel {
            self.cancel_prompt();
        } else if submit {
            match frame.storage_mut() {
                Some(storage) => self.submit_prompt(storage),
                None => self.storage_unavailable(),
            }
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(message) = self.notice.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed || ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.notice = None;
        }
    }
}
