use eframe::egui;
use crate::data::find_champion;
use crate::gui::app::LolSlotApp;
use crate::gui::helpers::{color_for_id, portrait_placeholder, rgb};
use crate::models::{DamageType, Lane, MAX_HISTORY};
use crate::utils::{format_relative, get_current_timestamp_ms};

impl LolSlotApp {
    pub fn show_history_panel(&mut self, ctx: &egui::Context) {
        let mut clear = false;

        egui::SidePanel::right("history_panel")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Recent spins");
                ui.separator();

                if self.history.entries().is_empty() {
                    ui.label(egui::RichText::new("No spins yet").weak());
                    return;
                }

                let now_ms = get_current_timestamp_ms();
                let total = self.history.entries().len();
                for (index, entry) in self.history.entries().iter().enumerate() {
                    let champion = find_champion(&entry.champion);
                    let name = champion.map(|c| c.name).unwrap_or(entry.champion.as_str());
                    let color = color_for_id(&entry.champion, champion.map(|c| c.color));

                    ui.horizontal(|ui| {
                        ui.label(format!("{}.", total - index));
                        portrait_placeholder(ui, name, color, 32.0).on_hover_text(format!(
                            "{}\n{}",
                            self.assets.champion_image_url(&entry.champion),
                            format_relative(entry.timestamp, now_ms)
                        ));
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(name).strong().color(color));
                            ui.horizontal(|ui| {
                                match Lane::from_id(&entry.lane) {
                                    Some(lane) => ui.colored_label(rgb(lane.color()), lane.label()),
                                    None => ui.label(entry.lane.as_str()),
                                };
                                match DamageType::from_id(&entry.damage_type) {
                                    Some(kind) => ui.colored_label(rgb(kind.color()), kind.id()),
                                    None => ui.label(entry.damage_type.as_str()),
                                };
                            });
                        });
                    });
                    ui.add_space(4.0);
                }

                ui.separator();
                ui.label(egui::RichText::new(format!("Keeps the last {} spins", MAX_HISTORY)).small().weak());
                if ui.button("Clear history").clicked() {
                    clear = true;
                }
            });

        if clear {
            self.history.clear();
        }
    }
}
