use std::time::Instant;
use eframe::egui;
use crate::audio::{Cue, SoundBoard};
use crate::engine::{PartySlotMachine, PartySpinOutcome, SlotMachine};
use crate::error::SlotError;
use crate::gui::effects::Confetti;
use crate::gui::helpers::{ReelItems, theme_visuals};
use crate::models::{AppMode, PartyResult, Preferences, SpinResult, ThemeName};
use crate::utils::{AssetConfig, HistoryStore};

/// Cue for a settled spin: solo rings the result bell, party plays the fanfare.
pub fn settle_cue(mode: AppMode) -> Cue {
    match mode {
        AppMode::Solo => Cue::Result,
        AppMode::Party => Cue::Win,
    }
}

/// Cue for closing the result window. Solo already rang on settlement.
pub fn close_cue(mode: AppMode) -> Option<Cue> {
    match mode {
        AppMode::Solo => None,
        AppMode::Party => Some(Cue::Result),
    }
}

pub struct LolSlotApp {
    /// Solo or party screen
    pub mode: AppMode,
    /// Solo three-reel machine
    pub solo: SlotMachine,
    /// Party machine
    pub party: PartySlotMachine,
    /// Last five solo results
    pub history: HistoryStore,
    /// Theme, mute flag and timing, persisted on change
    pub prefs: Preferences,
    pub sound: SoundBoard,
    /// Portrait CDN location
    pub assets: AssetConfig,
    pub confetti: Confetti,
    /// Display rows for the reels
    pub reels: ReelItems,
    /// Whether the settings window is open
    pub show_settings: bool,
    /// Set when a spin was refused because every reel is off
    pub all_disabled_warning: bool,
    /// Theme currently applied to the egui context
    applied_theme: Option<ThemeName>,
}

impl LolSlotApp {
    pub fn new(prefs: Preferences, history: HistoryStore, sound: SoundBoard) -> Result<Self, SlotError> {
        let settings = prefs.settings();
        let timing = settings.timing();
        let party = PartySlotMachine::new(settings.member_count, settings.party_variant, timing)?;
        let assets = AssetConfig::resolve(settings);

        Ok(Self {
            mode: AppMode::default(),
            solo: SlotMachine::new(timing),
            party,
            history,
            prefs,
            sound,
            assets,
            confetti: Confetti::default(),
            reels: ReelItems::new(),
            show_settings: false,
            all_disabled_warning: false,
            applied_theme: None,
        })
    }

    /// Switches screens. Whatever was spinning on the old screen is torn down.
    pub fn set_mode(&mut self, mode: AppMode) {
        if mode == self.mode {
            return;
        }
        match self.mode {
            AppMode::Solo => {
                self.solo.shutdown();
                self.solo.hide_result();
            }
            AppMode::Party => {
                self.party.shutdown();
                self.party.hide_result();
            }
        }
        self.sound.stop_spin();
        self.confetti.clear();
        self.all_disabled_warning = false;
        self.mode = mode;
    }

    pub fn toggle_mute(&mut self) {
        let muted = self.prefs.toggle_muted();
        self.sound.set_muted(muted);
    }

    /// Pushes timing changes from the preferences into both machines.
    pub fn apply_timing(&mut self) {
        let timing = self.prefs.settings().timing();
        self.solo.set_timing(timing);
        self.party.set_timing(timing);
    }

    pub fn set_member_count(&mut self, count: usize) {
        match self.party.set_member_count(count) {
            Ok(()) => self.prefs.update_settings(|settings| settings.set_member_count(count)),
            Err(e) => log::warn!("Ignoring party size change: {}", e),
        }
    }

    /// Fires due timers and reacts to settlements.
    fn advance(&mut self, now: Instant, time: f64) {
        if let Some(result) = self.solo.tick(now) {
            self.on_solo_complete(&result, time);
        }
        if let Some(results) = self.party.tick(now) {
            self.on_party_complete(&results, time);
        }
    }

    fn on_solo_complete(&mut self, result: &SpinResult, time: f64) {
        self.history.record(result);
        self.sound.stop_spin();
        self.sound.play(settle_cue(AppMode::Solo));
        self.confetti.burst(time);
    }

    fn on_party_complete(&mut self, results: &[PartyResult], time: f64) {
        log::info!("Party of {} dealt", results.len());
        self.sound.stop_spin();
        self.sound.play(settle_cue(AppMode::Party));
        self.confetti.burst(time);
    }

    pub fn close_result(&mut self) {
        match self.mode {
            AppMode::Solo => self.solo.hide_result(),
            AppMode::Party => self.party.hide_result(),
        }
        if let Some(cue) = close_cue(self.mode) {
            self.sound.play(cue);
        }
    }

    /// Starts a party spin. Returns true when one was started.
    pub fn spin_party(&mut self, now: Instant) -> bool {
        match self.party.spin(now) {
            Ok(PartySpinOutcome::Started) => {
                self.sound.play(Cue::Click);
                self.sound.start_spin();
                true
            }
            Ok(PartySpinOutcome::AlreadySpinning) => false,
            Err(e) => {
                log::error!("Party spin refused: {}", e);
                false
            }
        }
    }

    /// Closes the party result and deals again straight away.
    pub fn spin_party_again(&mut self, now: Instant) -> bool {
        self.close_result();
        self.spin_party(now)
    }

    fn result_visible(&self) -> bool {
        match self.mode {
            AppMode::Solo => self.solo.show_result(),
            AppMode::Party => self.party.show_result(),
        }
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant, time: f64) {
        let animating = self.solo.is_spinning() || self.party.is_spinning() || self.confetti.is_active(time);
        if animating {
            ctx.request_repaint();
            return;
        }
        let deadline = [self.solo.next_deadline(), self.party.next_deadline()]
            .into_iter()
            .flatten()
            .min();
        if let Some(deadline) = deadline {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("LoL Slot")
                        .size(20.0)
                        .strong()
                        .color(crate::gui::helpers::accent_color(self.prefs.theme())),
                );
                ui.add_space(12.0);

                let mut mode = self.mode;
                ui.selectable_value(&mut mode, AppMode::Solo, "Solo");
                ui.selectable_value(&mut mode, AppMode::Party, "Party");
                self.set_mode(mode);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mute_text = if self.prefs.is_muted() { "Sound: off" } else { "Sound: on" };
                    if ui.button(mute_text).clicked() {
                        self.toggle_mute();
                    }

                    if ui.button("Settings").clicked() {
                        self.show_settings = !self.show_settings;
                    }

                    let mut theme = self.prefs.theme();
                    egui::ComboBox::from_id_salt("theme_selector")
                        .selected_text(theme.label())
                        .show_ui(ui, |ui| {
                            for option in ThemeName::ALL {
                                ui.selectable_value(&mut theme, option, option.label());
                            }
                        });
                    if theme != self.prefs.theme() {
                        self.prefs.set_theme(theme);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let mut open = self.show_settings;
        let mut spin_ms = self.prefs.settings().spin_duration_ms;
        let mut stagger_ms = self.prefs.settings().stagger_delay_ms;

        egui::Window::new("Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add(egui::Slider::new(&mut spin_ms, 500..=10_000).text("Spin duration (ms)"));
                ui.add(egui::Slider::new(&mut stagger_ms, 0..=1000).text("Party stagger (ms)"));
                ui.separator();
                ui.label(format!("Data folder: {}", self.prefs.data_dir().display()));
                ui.label(format!("Portraits: {} (patch {})", self.assets.base_url, self.assets.version));
                if !self.sound.has_output() {
                    ui.label("No audio output device available");
                }
            });

        if spin_ms != self.prefs.settings().spin_duration_ms || stagger_ms != self.prefs.settings().stagger_delay_ms {
            self.prefs.update_settings(|settings| {
                settings.set_spin_duration_ms(spin_ms);
                settings.set_stagger_delay_ms(stagger_ms);
            });
            self.apply_timing();
        }
        self.show_settings = open;
    }
}

impl eframe::App for LolSlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let time = ctx.input(|i| i.time);

        if self.applied_theme != Some(self.prefs.theme()) {
            ctx.set_visuals(theme_visuals(self.prefs.theme()));
            self.applied_theme = Some(self.prefs.theme());
        }

        self.advance(now, time);

        if self.result_visible() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.close_result();
        }

        self.show_header(ctx);

        if self.mode == AppMode::Solo {
            self.show_history_panel(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.mode {
            AppMode::Solo => self.show_solo(ui, now, time),
            AppMode::Party => self.show_party(ui, now, time),
        });

        match self.mode {
            AppMode::Solo => self.show_solo_result(ctx),
            AppMode::Party => self.show_party_result(ctx, now),
        }
        self.show_settings_window(ctx);

        self.confetti.paint(ctx, time);
        self.schedule_repaint(ctx, now, time);
    }
}
