use std::env;
use std::path::PathBuf;

const DATA_DIR_ENV: &str = "LOL_SLOT_DATA_DIR";
const APP_DIR_NAME: &str = "lol_slot";

/// Where history and preferences live.
///
/// `LOL_SLOT_DATA_DIR` wins, then the platform's local data directory,
/// then the working directory.
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}
