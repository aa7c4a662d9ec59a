pub mod lane;
pub mod damage_type;
pub mod champion;
pub mod slot;
pub mod history;
pub mod settings;
pub mod preferences;
pub mod context;

pub use lane::Lane;
pub use damage_type::DamageType;
pub use champion::Champion;
pub use slot::{
    Dimension, PartyMemberSlotState, PartyResult, PartySlotMachineState, SelectedIndices, SlotField,
    SlotMachineState, SpinResult,
};
pub use history::{HistoryEntry, HistoryLog, MAX_HISTORY};
pub use settings::AppSettings;
pub use preferences::Preferences;
pub use context::{AppMode, PartyLayout, PartyVariant, ThemeName};
