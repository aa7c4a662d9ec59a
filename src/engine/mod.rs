pub mod timer;
pub mod random;
pub mod single;
pub mod party;

use std::time::Duration;
use crate::models::Lane;

pub use timer::{TimerHandle, TimerQueue};
pub use random::{distinct_indices, random_index};
pub use single::{SlotMachine, SpinOutcome};
pub use party::{PartySlotMachine, PartySpinOutcome, draw_party, validate_member_count};

pub const DEFAULT_SPIN_DURATION: Duration = Duration::from_millis(2000);
pub const DEFAULT_STAGGER_DELAY: Duration = Duration::from_millis(200);

/// Smallest party.
pub const MIN_MEMBERS: usize = 2;
/// Largest party: one member per lane.
pub const MAX_MEMBERS: usize = Lane::ALL.len();

/// How long spins take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTiming {
    /// From an accepted spin to settlement (solo), or to the first member's settlement (party).
    pub spin_duration: Duration,
    /// Offset between consecutive party members starting to spin.
    pub stagger_delay: Duration,
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self {
            spin_duration: DEFAULT_SPIN_DURATION,
            stagger_delay: DEFAULT_STAGGER_DELAY,
        }
    }
}
