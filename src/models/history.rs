use serde::{Deserialize, Serialize};
use crate::models::SpinResult;

/// Most entries kept in the spin history.
pub const MAX_HISTORY: usize = 5;

/// A completed solo spin, in the persisted JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Champion id
    pub champion: String,
    /// Lane id
    pub lane: String,
    /// Damage type id
    #[serde(rename = "type")]
    pub damage_type: String,
    /// Unix milliseconds
    pub timestamp: u64,
}

impl HistoryEntry {
    pub fn from_result(result: &SpinResult, timestamp: u64) -> Self {
        Self {
            champion: result.champion.id.to_string(),
            lane: result.lane.id().to_string(),
            damage_type: result.damage_type.id().to_string(),
            timestamp,
        }
    }
}

/// Newest-first log capped at `MAX_HISTORY`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from persisted entries, keeping only the first `MAX_HISTORY`.
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(MAX_HISTORY);
        Self { entries }
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
