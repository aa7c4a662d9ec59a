use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::engine::SpinTiming;
use crate::models::{PartyLayout, PartyVariant, ThemeName};

pub const DEFAULT_DDRAGON_BASE_URL: &str = "https://ddragon.leagueoflegends.com";
pub const DEFAULT_DDRAGON_VERSION: &str = "16.2.1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Selected color theme
    pub theme: ThemeName,
    /// Time from spin to settlement in milliseconds (500-10000)
    pub spin_duration_ms: u64,
    /// Delay between party members starting to spin in milliseconds (0-1000)
    pub stagger_delay_ms: u64,
    /// Party size (2-5)
    pub member_count: usize,
    pub party_variant: PartyVariant,
    pub party_layout: PartyLayout,
    /// Base URL of the portrait CDN
    pub ddragon_base_url: String,
    /// Patch version used in portrait URLs
    pub ddragon_version: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            spin_duration_ms: 2000,
            stagger_delay_ms: 200,
            member_count: 5,
            party_variant: PartyVariant::default(),
            party_layout: PartyLayout::default(),
            ddragon_base_url: DEFAULT_DDRAGON_BASE_URL.to_string(),
            ddragon_version: DEFAULT_DDRAGON_VERSION.to_string(),
        }
    }
}

impl AppSettings {
    /// Clamps spin duration to valid range (500-10000 ms)
    pub fn set_spin_duration_ms(&mut self, ms: u64) {
        self.spin_duration_ms = ms.clamp(500, 10_000);
    }

    /// Clamps stagger delay to valid range (0-1000 ms)
    pub fn set_stagger_delay_ms(&mut self, ms: u64) {
        self.stagger_delay_ms = ms.clamp(0, 1000);
    }

    /// Clamps party size to valid range (2-5)
    pub fn set_member_count(&mut self, count: usize) {
        self.member_count = count.clamp(crate::engine::MIN_MEMBERS, crate::engine::MAX_MEMBERS);
    }

    /// Re-applies every clamp, for values that came from disk.
    pub fn sanitized(mut self) -> Self {
        self.set_spin_duration_ms(self.spin_duration_ms);
        self.set_stagger_delay_ms(self.stagger_delay_ms);
        self.set_member_count(self.member_count);
        self
    }

    pub fn timing(&self) -> SpinTiming {
        SpinTiming {
            spin_duration: Duration::from_millis(self.spin_duration_ms),
            stagger_delay: Duration::from_millis(self.stagger_delay_ms),
        }
    }
}
