/// One of the five map roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Lane {
    /// Canonical role order, also the fixed party seating order.
    pub const ALL: [Lane; 5] = [Lane::Top, Lane::Jungle, Lane::Mid, Lane::Adc, Lane::Support];

    pub fn id(self) -> &'static str {
        match self {
            Lane::Top => "TOP",
            Lane::Jungle => "JUNGLE",
            Lane::Mid => "MID",
            Lane::Adc => "ADC",
            Lane::Support => "SUPPORT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Lane::Top => "Top",
            Lane::Jungle => "Jungle",
            Lane::Mid => "Mid",
            Lane::Adc => "Bot (ADC)",
            Lane::Support => "Support",
        }
    }

    /// Representative color as `[r, g, b]`.
    pub fn color(self) -> [u8; 3] {
        match self {
            Lane::Top => [248, 113, 113],
            Lane::Jungle => [74, 222, 128],
            Lane::Mid => [96, 165, 250],
            Lane::Adc => [250, 204, 21],
            Lane::Support => [244, 114, 182],
        }
    }

    pub fn from_id(id: &str) -> Option<Lane> {
        Lane::ALL.into_iter().find(|lane| lane.id() == id)
    }
}
