use std::path::{Path, PathBuf};
use crate::models::{AppSettings, ThemeName};
use crate::utils::{auto_save_app_settings, auto_save_muted, load_app_settings, load_muted};

/// User preferences shared by every view.
///
/// Created once in `main` from the data directory and handed to the views
/// explicitly. Every mutator writes the change back to disk straight away.
#[derive(Debug, Clone)]
pub struct Preferences {
    dir: PathBuf,
    settings: AppSettings,
    muted: bool,
}

impl Preferences {
    pub fn load(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            settings: load_app_settings(dir),
            muted: load_muted(dir),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.dir
    }

    pub fn theme(&self) -> ThemeName {
        self.settings.theme
    }

    pub fn set_theme(&mut self, theme: ThemeName) {
        self.update_settings(|settings| settings.theme = theme);
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flips the mute flag and returns the new value.
    pub fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        auto_save_muted(&self.dir, self.muted);
        self.muted
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Applies `change` and saves if anything actually changed.
    pub fn update_settings(&mut self, change: impl FnOnce(&mut AppSettings)) {
        let mut updated = self.settings.clone();
        change(&mut updated);
        let updated = updated.sanitized();
        if updated != self.settings {
            self.settings = updated;
            auto_save_app_settings(&self.dir, &self.settings);
        }
    }
}
