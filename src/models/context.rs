use serde::{Deserialize, Serialize};

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Solo,
    Party,
}

/// How party lanes are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PartyVariant {
    /// Member i always plays `Lane::ALL[i]`.
    #[default]
    FixedLanes,
    /// Lanes and champions are dealt without replacement.
    RandomLanes,
}

impl PartyVariant {
    pub fn label(self) -> &'static str {
        match self {
            PartyVariant::FixedLanes => "Fixed lanes",
            PartyVariant::RandomLanes => "Random lanes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PartyLayout {
    #[default]
    Horizontal,
    Vertical,
    Circular,
}

impl PartyLayout {
    pub const ALL: [PartyLayout; 3] = [PartyLayout::Horizontal, PartyLayout::Vertical, PartyLayout::Circular];

    pub fn label(self) -> &'static str {
        match self {
            PartyLayout::Horizontal => "Horizontal",
            PartyLayout::Vertical => "Vertical",
            PartyLayout::Circular => "Circular",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    PureDark,
    SoftGold,
    OceanCalm,
    SunsetWarm,
    SummonersRift,
}

impl ThemeName {
    pub const ALL: [ThemeName; 5] = [
        ThemeName::PureDark,
        ThemeName::SoftGold,
        ThemeName::OceanCalm,
        ThemeName::SunsetWarm,
        ThemeName::SummonersRift,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ThemeName::PureDark => "Pure Dark",
            ThemeName::SoftGold => "Soft Gold",
            ThemeName::OceanCalm => "Ocean Calm",
            ThemeName::SunsetWarm => "Sunset Warm",
            ThemeName::SummonersRift => "Summoner's Rift",
        }
    }
}
