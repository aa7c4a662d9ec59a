/// Build archetype: physical or magic damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageType {
    Ad,
    Ap,
}

impl DamageType {
    pub const ALL: [DamageType; 2] = [DamageType::Ad, DamageType::Ap];

    pub fn id(self) -> &'static str {
        match self {
            DamageType::Ad => "AD",
            DamageType::Ap => "AP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DamageType::Ad => "Physical (AD)",
            DamageType::Ap => "Magic (AP)",
        }
    }

    pub fn color(self) -> [u8; 3] {
        match self {
            DamageType::Ad => [251, 146, 60],
            DamageType::Ap => [192, 132, 252],
        }
    }

    pub fn from_id(id: &str) -> Option<DamageType> {
        DamageType::ALL.into_iter().find(|kind| kind.id() == id)
    }
}
