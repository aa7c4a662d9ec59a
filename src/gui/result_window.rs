use std::time::Instant;
use eframe::egui;
use crate::gui::app::LolSlotApp;
use crate::gui::helpers::{champion_color, portrait_placeholder, rgb};
use crate::models::{Champion, DamageType, Lane};

impl LolSlotApp {
    pub fn show_solo_result(&mut self, ctx: &egui::Context) {
        if !self.solo.show_result() {
            return;
        }
        let state = *self.solo.state();
        let mut close = false;

        egui::Window::new("Result")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    if let Some(champion) = state.champion.current_value {
                        portrait_placeholder(ui, champion.name, champion_color(champion), 96.0);
                        ui.add_space(6.0);
                        ui.label(egui::RichText::new(champion.name).size(26.0).strong().color(champion_color(champion)));
                        self.portrait_link(ui, champion);
                    }
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        if let Some(lane) = state.lane.current_value {
                            lane_badge(ui, lane);
                        }
                        if let Some(damage_type) = state.damage_type.current_value {
                            damage_badge(ui, damage_type);
                        }
                    });
                    ui.add_space(10.0);
                    if ui.button("Close (Esc)").clicked() {
                        close = true;
                    }
                });
            });

        if close {
            self.close_result();
        }
    }

    pub fn show_party_result(&mut self, ctx: &egui::Context, now: Instant) {
        if !self.party.show_result() {
            return;
        }
        let results = self.party.results();
        let mut close = false;
        let mut spin_again = false;

        egui::Window::new("Party result")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                egui::Grid::new("party_result_grid").striped(true).spacing([16.0, 6.0]).show(ui, |ui| {
                    for (index, result) in results.iter().enumerate() {
                        ui.label(format!("#{}", index + 1));
                        lane_badge(ui, result.lane);
                        portrait_placeholder(ui, result.champion.name, champion_color(result.champion), 28.0);
                        ui.label(egui::RichText::new(result.champion.name).strong().color(champion_color(result.champion)));
                        damage_badge(ui, result.damage_type);
                        ui.end_row();
                    }
                });
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button(egui::RichText::new("Spin again").strong()).clicked() {
                        spin_again = true;
                    }
                    if ui.button("Close (Esc)").clicked() {
                        close = true;
                    }
                });
            });

        if spin_again {
            self.spin_party_again(now);
        } else if close {
            self.close_result();
        }
    }

    fn portrait_link(&self, ui: &mut egui::Ui, champion: &Champion) {
        ui.horizontal(|ui| {
            ui.hyperlink_to("Portrait", self.assets.champion_image_url(champion.id));
            ui.hyperlink_to("Splash art", self.assets.champion_splash_url(champion.id, 0));
        });
    }
}

fn lane_badge(ui: &mut egui::Ui, lane: Lane) {
    ui.label(egui::RichText::new(lane.label()).strong().color(rgb(lane.color())));
}

fn damage_badge(ui: &mut egui::Ui, damage_type: DamageType) {
    ui.label(egui::RichText::new(damage_type.label()).strong().color(rgb(damage_type.color())));
}
