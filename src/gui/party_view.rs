use std::f32::consts::TAU;
use std::time::Instant;
use eframe::egui;
use crate::engine::{MAX_MEMBERS, MIN_MEMBERS};
use crate::gui::app::LolSlotApp;
use crate::gui::helpers::{ReelItems, draw_reel, rgb, spinning_index};
use crate::models::{PartyLayout, PartyMemberSlotState, PartyVariant};

const CARD_WIDTH: f32 = 150.0;
const CARD_HEIGHT: f32 = 190.0;

impl LolSlotApp {
    pub fn show_party(&mut self, ui: &mut egui::Ui, now: Instant, time: f64) {
        let spinning = self.party.is_spinning();

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Members:");
            let current = self.party.member_count();
            let mut requested = None;
            for count in MIN_MEMBERS..=MAX_MEMBERS {
                let button = egui::Button::new(count.to_string()).selected(count == current);
                if ui.add_enabled(!spinning, button).clicked() && count != current {
                    requested = Some(count);
                }
            }
            if let Some(count) = requested {
                self.set_member_count(count);
            }

            ui.separator();

            let mut variant = self.party.variant();
            ui.add_enabled_ui(!spinning, |ui| {
                ui.selectable_value(&mut variant, PartyVariant::FixedLanes, PartyVariant::FixedLanes.label());
                ui.selectable_value(&mut variant, PartyVariant::RandomLanes, PartyVariant::RandomLanes.label());
            });
            if variant != self.party.variant() {
                self.party.set_variant(variant);
                self.prefs.update_settings(|settings| settings.party_variant = variant);
            }

            ui.separator();

            let mut layout = self.prefs.settings().party_layout;
            for option in PartyLayout::ALL {
                ui.selectable_value(&mut layout, option, option.label());
            }
            if layout != self.prefs.settings().party_layout {
                self.prefs.update_settings(|settings| settings.party_layout = layout);
            }
        });

        ui.add_space(12.0);

        let members = self.party.members().to_vec();
        let reels = &self.reels;
        match self.prefs.settings().party_layout {
            PartyLayout::Horizontal => {
                egui::ScrollArea::horizontal().id_salt("party_horizontal").show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for (index, member) in members.iter().enumerate() {
                            member_card(ui, reels, index, member, time);
                        }
                    });
                });
            }
            PartyLayout::Vertical => {
                egui::ScrollArea::vertical().id_salt("party_vertical").max_height(ui.available_height() - 80.0).show(
                    ui,
                    |ui| {
                        ui.vertical_centered(|ui| {
                            for (index, member) in members.iter().enumerate() {
                                member_card(ui, reels, index, member, time);
                            }
                        });
                    },
                );
            }
            PartyLayout::Circular => {
                let size = egui::Vec2::new(ui.available_width(), (ui.available_height() - 80.0).max(CARD_HEIGHT * 2.5));
                let (area, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                let radius = (area.width().min(area.height()) - CARD_HEIGHT) / 2.0;
                for (index, member) in members.iter().enumerate() {
                    // First seat at twelve o'clock, clockwise
                    let angle = TAU * index as f32 / members.len() as f32 - TAU / 4.0;
                    let center = area.center() + egui::Vec2::angled(angle) * radius.max(0.0);
                    let rect = egui::Rect::from_center_size(center, egui::Vec2::new(CARD_WIDTH, CARD_HEIGHT));
                    ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
                        member_card(ui, reels, index, member, time);
                    });
                }
            }
        }

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            let text = if spinning { "Spinning..." } else { "SPIN PARTY" };
            let button = egui::Button::new(egui::RichText::new(text).size(22.0).strong())
                .min_size(egui::Vec2::new(200.0, 48.0));
            if ui.add_enabled(!spinning, button).clicked() {
                self.spin_party(now);
            }
        });
    }
}

fn member_card(ui: &mut egui::Ui, reels: &ReelItems, index: usize, member: &PartyMemberSlotState, time: f64) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH - 16.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(format!("Member {}", index + 1)).small());

            if member.lane.is_spinning {
                let item = &reels.lanes[spinning_index(time, reels.lanes.len(), index)];
                ui.colored_label(item.color, item.label.as_str());
            } else if let Some(lane) = member.lane.current_value {
                ui.colored_label(rgb(lane.color()), egui::RichText::new(lane.label()).strong());
            } else {
                ui.label("?");
            }

            let champion_index = member
                .champion
                .current_value
                .and_then(|champion| crate::data::champion_index(champion.id))
                .unwrap_or(0);
            let shown = if member.champion.is_spinning {
                spinning_index(time, reels.champions.len(), index * 3 + 1)
            } else {
                champion_index
            };
            draw_reel(ui, &reels.champions, shown, member.champion.is_spinning, true, CARD_WIDTH - 24.0);

            let damage_index = member
                .damage_type
                .current_value
                .and_then(|kind| crate::models::DamageType::ALL.iter().position(|k| *k == kind))
                .unwrap_or(0);
            let shown = if member.damage_type.is_spinning {
                spinning_index(time, reels.damage_types.len(), index * 3 + 2)
            } else {
                damage_index
            };
            let item = &reels.damage_types[shown];
            ui.colored_label(item.color, item.label.as_str());
        });
    });
}
