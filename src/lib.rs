pub mod error;
pub mod models;
pub mod data;
pub mod engine;
pub mod utils;
pub mod audio;
pub mod gui;

#[cfg(test)]
mod test;

// Re-exports for convenience
pub use error::{AudioError, SlotError, StorageError};
pub use engine::{PartySlotMachine, SlotMachine, SpinTiming, TimerQueue};
pub use gui::LolSlotApp;
