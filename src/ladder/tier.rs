use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Ladder tiers, lowest first. Declaration order is ladder order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

/// Where a tier sits on the ladder: inside the divisioned block, or one of
/// the uncapped apex tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierClass {
    Divisioned(u8),
    Apex(ApexTier),
}

impl Tier {
    pub const DIVISIONED_COUNT: u8 = 6;

    pub fn class(self) -> TierClass {
        match self {
            Tier::Master => TierClass::Apex(ApexTier::Master),
            Tier::Grandmaster => TierClass::Apex(ApexTier::Grandmaster),
            Tier::Challenger => TierClass::Apex(ApexTier::Challenger),
            divisioned => TierClass::Divisioned(divisioned as u8),
        }
    }

    pub fn has_divisions(self) -> bool {
        matches!(self.class(), TierClass::Divisioned(_))
    }
}

/// The single-division tiers whose league points have no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum ApexTier {
    Master,
    Grandmaster,
    Challenger,
}

impl ApexTier {
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Divisions inside a tier, lowest first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Division {
    #[serde(rename = "IV")]
    #[strum(serialize = "IV")]
    Four,
    #[serde(rename = "III")]
    #[strum(serialize = "III")]
    Three,
    #[serde(rename = "II")]
    #[strum(serialize = "II")]
    Two,
    #[serde(rename = "I")]
    #[strum(serialize = "I")]
    One,
}

impl Division {
    /// 0 for IV up to 3 for I.
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}
