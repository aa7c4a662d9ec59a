pub mod time;
pub mod paths;
pub mod color;
pub mod assets;
pub mod settings_persistence;
pub mod history_persistence;

pub use time::{format_relative, get_current_timestamp_ms};
pub use paths::default_data_dir;
pub use color::{fallback_color, parse_hex_color};
pub use assets::AssetConfig;
pub use settings_persistence::{auto_save_app_settings, auto_save_muted, load_app_settings, load_muted};
pub use history_persistence::{HistoryStore, load_history, save_history};
