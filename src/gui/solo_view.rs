use std::time::Instant;
use eframe::egui;
use crate::audio::Cue;
use crate::engine::SpinOutcome;
use crate::gui::app::LolSlotApp;
use crate::gui::helpers::{ReelItem, draw_reel, spinning_index};
use crate::models::Dimension;

const REEL_WIDTH: f32 = 180.0;

impl LolSlotApp {
    pub fn show_solo(&mut self, ui: &mut egui::Ui, now: Instant, time: f64) {
        let state = *self.solo.state();
        let selected = self.solo.selected_indices();

        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading("Spin for your next game");
            ui.add_space(12.0);
        });

        // Reels side by side, each with its toggle above
        ui.horizontal(|ui| {
            let total = REEL_WIDTH * 3.0 + ui.spacing().item_spacing.x * 2.0;
            ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));

            let reels: [(&str, Dimension, &[ReelItem], usize, bool, bool); 3] = [
                ("Lane", Dimension::Lane, &self.reels.lanes, selected.lane, state.lane.enabled, state.lane.is_spinning),
                (
                    "Champion",
                    Dimension::Champion,
                    &self.reels.champions,
                    selected.champion,
                    state.champion.enabled,
                    state.champion.is_spinning,
                ),
                (
                    "Damage",
                    Dimension::DamageType,
                    &self.reels.damage_types,
                    selected.damage_type,
                    state.damage_type.enabled,
                    state.damage_type.is_spinning,
                ),
            ];

            let mut toggled = None;
            for (seed, (label, dimension, items, index, enabled, spinning)) in reels.into_iter().enumerate() {
                ui.vertical(|ui| {
                    ui.set_width(REEL_WIDTH);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(label).strong());
                        let toggle_text = if enabled { "ON" } else { "OFF" };
                        if ui.add(egui::Button::new(toggle_text).selected(enabled)).clicked() {
                            toggled = Some(dimension);
                        }
                    });
                    let shown = if spinning { spinning_index(time, items.len(), seed) } else { index };
                    draw_reel(ui, items, shown, spinning, enabled, REEL_WIDTH);
                });
            }
            if let Some(dimension) = toggled {
                self.solo.toggle(dimension);
                self.all_disabled_warning = false;
                self.sound.play(Cue::Click);
            }
        });

        ui.add_space(20.0);

        ui.vertical_centered(|ui| {
            let spinning = self.solo.is_spinning();
            let text = if spinning { "Spinning..." } else { "SPIN" };
            let button = egui::Button::new(egui::RichText::new(text).size(22.0).strong())
                .min_size(egui::Vec2::new(180.0, 48.0));
            if ui.add_enabled(!spinning, button).clicked() {
                match self.solo.spin(now) {
                    SpinOutcome::Started => {
                        self.all_disabled_warning = false;
                        self.sound.play(Cue::Click);
                        self.sound.start_spin();
                    }
                    SpinOutcome::AllDisabled => self.all_disabled_warning = true,
                    SpinOutcome::AlreadySpinning => {}
                }
            }

            if self.solo.all_disabled() {
                let color = if self.all_disabled_warning {
                    egui::Color32::from_rgb(248, 113, 113)
                } else {
                    ui.visuals().weak_text_color()
                };
                ui.add_space(6.0);
                ui.colored_label(color, "Turn on at least one reel to spin");
            }
        });
    }
}
