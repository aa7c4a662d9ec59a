use crate::models::{Champion, DamageType, Lane};

/// One reel: whether it takes part in spins, what it shows, and whether it is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotField<T> {
    pub enabled: bool,
    pub current_value: Option<T>,
    pub is_spinning: bool,
}

impl<T> SlotField<T> {
    pub fn new(value: T) -> Self {
        Self {
            enabled: true,
            current_value: Some(value),
            is_spinning: false,
        }
    }
}

/// The three independently toggleable dimensions of a solo spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Lane,
    Champion,
    DamageType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotMachineState {
    pub lane: SlotField<Lane>,
    pub champion: SlotField<&'static Champion>,
    pub damage_type: SlotField<DamageType>,
}

impl SlotMachineState {
    pub fn is_spinning(&self) -> bool {
        self.lane.is_spinning || self.champion.is_spinning || self.damage_type.is_spinning
    }

    pub fn all_disabled(&self) -> bool {
        !self.lane.enabled && !self.champion.enabled && !self.damage_type.enabled
    }
}

/// Final combination reported once a solo spin settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinResult {
    pub lane: Lane,
    pub champion: &'static Champion,
    pub damage_type: DamageType,
}

/// Reel indices last drawn for each dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectedIndices {
    pub lane: usize,
    pub champion: usize,
    pub damage_type: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyMemberSlotState {
    pub lane: SlotField<Lane>,
    pub champion: SlotField<&'static Champion>,
    pub damage_type: SlotField<DamageType>,
}

/// What one party member ended up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyResult {
    pub lane: Lane,
    pub champion: &'static Champion,
    pub damage_type: DamageType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartySlotMachineState {
    pub members: Vec<PartyMemberSlotState>,
    pub is_spinning: bool,
    pub show_result: bool,
}
