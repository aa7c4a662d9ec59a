pub mod app;
pub mod helpers;
pub mod effects;
pub mod solo_view;
pub mod party_view;
pub mod result_window;
pub mod history_panel;

pub use app::LolSlotApp;
