use std::fs;
use std::path::{Path, PathBuf};
use crate::error::StorageError;
use crate::models::{HistoryEntry, HistoryLog, SpinResult};
use crate::utils::settings_persistence::write_file;
use crate::utils::time::get_current_timestamp_ms;

const HISTORY_FILE: &str = "spin_history.json";

pub fn get_history_file_path(dir: &Path) -> PathBuf {
    dir.join(HISTORY_FILE)
}

/// Reads the history file. Missing, unreadable or corrupt files give an empty log.
pub fn load_history(dir: &Path) -> HistoryLog {
    let file_path = get_history_file_path(dir);

    if !file_path.exists() {
        log::info!("No existing spin history found, starting empty");
        return HistoryLog::new();
    }

    match fs::read_to_string(&file_path) {
        Ok(content) => match serde_json::from_str::<Vec<HistoryEntry>>(&content) {
            Ok(entries) => {
                let history = HistoryLog::from_entries(entries);
                log::info!("Loaded spin history with {} entries", history.len());
                history
            }
            Err(e) => {
                log::warn!("Error parsing spin history JSON: {}. Starting empty.", e);
                HistoryLog::new()
            }
        },
        Err(e) => {
            log::warn!("Error reading spin history file: {}. Starting empty.", e);
            HistoryLog::new()
        }
    }
}

pub fn save_history(dir: &Path, history: &HistoryLog) -> Result<(), StorageError> {
    let json_content = serde_json::to_string(history)?;
    write_file(&get_history_file_path(dir), json_content.as_bytes())?;
    log::debug!("Saved spin history with {} entries", history.len());
    Ok(())
}

pub fn auto_save_history(dir: &Path, history: &HistoryLog) {
    if let Err(e) = save_history(dir, history) {
        log::warn!("Failed to auto-save spin history: {}", e);
    }
}

/// The spin history together with the file it is mirrored to.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    dir: PathBuf,
    log: HistoryLog,
}

impl HistoryStore {
    pub fn load(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            log: load_history(dir),
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        self.log.entries()
    }

    pub fn log(&self) -> &HistoryLog {
        &self.log
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        self.log.append(entry);
        auto_save_history(&self.dir, &self.log);
    }

    /// Appends a settled spin stamped with the current time.
    pub fn record(&mut self, result: &SpinResult) {
        self.append(HistoryEntry::from_result(result, get_current_timestamp_ms()));
    }

    pub fn clear(&mut self) {
        self.log.clear();
        auto_save_history(&self.dir, &self.log);
    }
}
