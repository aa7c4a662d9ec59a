use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use crate::error::StorageError;
use crate::models::AppSettings;

const SETTINGS_FILE: &str = "settings.json";
const MUTED_FILE: &str = "sound_muted";

pub fn get_settings_file_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE)
}

pub fn get_muted_file_path(dir: &Path) -> PathBuf {
    dir.join(MUTED_FILE)
}

pub fn load_app_settings(dir: &Path) -> AppSettings {
    let file_path = get_settings_file_path(dir);

    if !file_path.exists() {
        log::info!("No existing settings found, using defaults");
        return AppSettings::default();
    }

    match fs::read_to_string(&file_path) {
        Ok(content) => {
            match serde_json::from_str::<AppSettings>(&content) {
                Ok(settings) => {
                    let settings = settings.sanitized();
                    log::info!("Loaded settings: theme {:?}, spin {}ms, stagger {}ms, party of {}",
                               settings.theme, settings.spin_duration_ms,
                               settings.stagger_delay_ms, settings.member_count);
                    settings
                }
                Err(e) => {
                    log::warn!("Error parsing settings JSON: {}. Using defaults.", e);
                    AppSettings::default()
                }
            }
        }
        Err(e) => {
            log::warn!("Error reading settings file: {}. Using defaults.", e);
            AppSettings::default()
        }
    }
}

pub fn save_app_settings(dir: &Path, settings: &AppSettings) -> Result<(), StorageError> {
    let json_content = serde_json::to_string_pretty(settings)?;
    write_file(&get_settings_file_path(dir), json_content.as_bytes())?;
    log::info!("Saved settings to {}", dir.display());
    Ok(())
}

pub fn auto_save_app_settings(dir: &Path, settings: &AppSettings) {
    if let Err(e) = save_app_settings(dir, settings) {
        log::warn!("Failed to auto-save settings: {}", e);
    }
}

/// Reads the mute flag. Anything but a literal `true` means unmuted.
pub fn load_muted(dir: &Path) -> bool {
    match fs::read_to_string(get_muted_file_path(dir)) {
        Ok(content) => content.trim() == "true",
        Err(_) => false,
    }
}

pub fn save_muted(dir: &Path, muted: bool) -> Result<(), StorageError> {
    let content = if muted { "true" } else { "false" };
    write_file(&get_muted_file_path(dir), content.as_bytes())
}

pub fn auto_save_muted(dir: &Path, muted: bool) {
    if let Err(e) = save_muted(dir, muted) {
        log::warn!("Failed to save mute preference: {}", e);
    }
}

pub(crate) fn write_file(path: &Path, content: &[u8]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    file.flush()?;
    Ok(())
}
