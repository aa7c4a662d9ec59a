use eframe::egui;
use crate::data::CHAMPIONS;
use crate::models::{Champion, DamageType, Lane, ThemeName};
use crate::utils::{fallback_color, parse_hex_color};

/// One row a reel can show.
#[derive(Debug, Clone)]
pub struct ReelItem {
    pub label: String,
    pub color: egui::Color32,
}

/// Display rows for every reel, built once at startup.
pub struct ReelItems {
    pub lanes: Vec<ReelItem>,
    pub champions: Vec<ReelItem>,
    pub damage_types: Vec<ReelItem>,
}

impl ReelItems {
    pub fn new() -> Self {
        Self {
            lanes: Lane::ALL
                .iter()
                .map(|lane| ReelItem { label: lane.label().to_string(), color: rgb(lane.color()) })
                .collect(),
            champions: CHAMPIONS
                .iter()
                .map(|champion| ReelItem { label: champion.name.to_string(), color: champion_color(champion) })
                .collect(),
            damage_types: DamageType::ALL
                .iter()
                .map(|kind| ReelItem { label: kind.label().to_string(), color: rgb(kind.color()) })
                .collect(),
        }
    }
}

impl Default for ReelItems {
    fn default() -> Self {
        Self::new()
    }
}

pub fn rgb(color: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(color[0], color[1], color[2])
}

pub fn champion_color(champion: &Champion) -> egui::Color32 {
    color_for_id(champion.id, Some(champion.color))
}

/// Color for a champion id, falling back to a derived color for unknown ids.
pub fn color_for_id(id: &str, hex: Option<&str>) -> egui::Color32 {
    let parsed = hex
        .and_then(parse_hex_color)
        .or_else(|| parse_hex_color(&fallback_color(id)));
    parsed.map(rgb).unwrap_or(egui::Color32::GRAY)
}

/// Index a spinning reel should show this frame.
pub fn spinning_index(time: f64, len: usize, seed: usize) -> usize {
    if len == 0 {
        return 0;
    }
    // ~14 rows per second
    ((time * 14.0) as usize).wrapping_add(seed.wrapping_mul(7)) % len
}

/// Draws a three-row reel window centered on `index`.
pub fn draw_reel(ui: &mut egui::Ui, items: &[ReelItem], index: usize, spinning: bool, enabled: bool, width: f32) {
    let row_height = 28.0;
    let (rect, _) = ui.allocate_exact_size(egui::Vec2::new(width, row_height * 3.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let visuals = ui.visuals();

    painter.rect_filled(rect, 6.0, visuals.extreme_bg_color);

    if items.is_empty() {
        return;
    }

    let len = items.len();
    for offset in 0..3usize {
        let item_index = (index + len + offset - 1) % len;
        let item = &items[item_index];
        let center = egui::Pos2::new(rect.center().x, rect.min.y + row_height * (offset as f32 + 0.5));
        let is_middle = offset == 1;

        let mut color = item.color;
        if !is_middle || !enabled {
            color = color.gamma_multiply(0.35);
        }
        let size = if is_middle { 18.0 } else { 13.0 };
        painter.text(center, egui::Align2::CENTER_CENTER, &item.label, egui::FontId::proportional(size), color);
    }

    // Center payline
    let line_rect = egui::Rect::from_center_size(rect.center(), egui::Vec2::new(width - 6.0, row_height));
    let line_color = if spinning {
        egui::Color32::from_rgb(255, 215, 0)
    } else {
        visuals.widgets.noninteractive.bg_stroke.color
    };
    painter.rect_stroke(line_rect, 4.0, egui::Stroke::new(1.5, line_color), egui::StrokeKind::Inside);
}

/// Colored square with the champion's initials, standing in for a portrait.
pub fn portrait_placeholder(ui: &mut egui::Ui, label: &str, color: egui::Color32, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::Vec2::splat(size), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, size * 0.15, color.gamma_multiply(0.8));
    let initials: String = label
        .split(|c: char| c.is_whitespace() || c == '\'')
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect();
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(size * 0.4),
        egui::Color32::WHITE,
    );
    response
}

pub fn theme_visuals(theme: ThemeName) -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    let (panel, window, accent) = match theme {
        ThemeName::PureDark => (
            egui::Color32::from_rgb(17, 17, 17),
            egui::Color32::from_rgb(28, 28, 28),
            egui::Color32::from_rgb(250, 204, 21),
        ),
        ThemeName::SoftGold => (
            egui::Color32::from_rgb(28, 24, 16),
            egui::Color32::from_rgb(40, 34, 22),
            egui::Color32::from_rgb(212, 175, 55),
        ),
        ThemeName::OceanCalm => (
            egui::Color32::from_rgb(12, 24, 36),
            egui::Color32::from_rgb(18, 36, 52),
            egui::Color32::from_rgb(0, 206, 209),
        ),
        ThemeName::SunsetWarm => (
            egui::Color32::from_rgb(36, 18, 20),
            egui::Color32::from_rgb(52, 26, 28),
            egui::Color32::from_rgb(255, 99, 71),
        ),
        ThemeName::SummonersRift => (
            egui::Color32::from_rgb(10, 20, 14),
            egui::Color32::from_rgb(16, 32, 22),
            egui::Color32::from_rgb(200, 170, 110),
        ),
    };
    visuals.panel_fill = panel;
    visuals.window_fill = window;
    visuals.selection.bg_fill = accent.gamma_multiply(0.5);
    visuals.hyperlink_color = accent;
    visuals
}

/// Accent color used for titles and highlights.
pub fn accent_color(theme: ThemeName) -> egui::Color32 {
    theme_visuals(theme).hyperlink_color
}
