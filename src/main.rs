use eframe::NativeOptions;
use eframe::egui::ViewportBuilder;
use std::error::Error;

use lol_slot::audio::SoundBoard;
use lol_slot::gui::LolSlotApp;
use lol_slot::models::Preferences;
use lol_slot::utils::{HistoryStore, default_data_dir};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_dir = default_data_dir();
    log::info!("Using data folder {}", data_dir.display());

    let prefs = Preferences::load(&data_dir);
    let history = HistoryStore::load(&data_dir);
    let sound = SoundBoard::new(prefs.is_muted());
    let app = LolSlotApp::new(prefs, history, sound)?;

    let native_options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([720.0, 520.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native("LoL Slot", native_options, Box::new(|_cc| Ok(Box::new(app))))?;

    Ok(())
}
