use serde::{Deserialize, Serialize};

use super::{
    models::RankValue,
    tier::{ApexTier, TierClass},
};

/// Every apex cap starts here and never drops below it.
pub const CAP_SEED: u32 = 100;

/// Highest league points seen so far in each apex tier.
///
/// Owned by the caller and threaded through successive normalizations of a
/// growing history. Values only ever rise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderCaps {
    master: u32,
    grandmaster: u32,
    challenger: u32,
}

impl Default for LadderCaps {
    fn default() -> Self {
        Self {
            master: CAP_SEED,
            grandmaster: CAP_SEED,
            challenger: CAP_SEED,
        }
    }
}

impl LadderCaps {
    pub fn get(&self, tier: ApexTier) -> u32 {
        let raw = match tier {
            ApexTier::Master => self.master,
            ApexTier::Grandmaster => self.grandmaster,
            ApexTier::Challenger => self.challenger,
        };
        raw.max(CAP_SEED)
    }

    fn slot(&mut self, tier: ApexTier) -> &mut u32 {
        match tier {
            ApexTier::Master => &mut self.master,
            ApexTier::Grandmaster => &mut self.grandmaster,
            ApexTier::Challenger => &mut self.challenger,
        }
    }

    /// Raises the cap for `rank`'s tier if its league points exceed it.
    /// Returns the previous cap when a raise happened.
    pub fn observe(&mut self, rank: &RankValue) -> Option<u32> {
        let TierClass::Apex(tier) = rank.tier.class() else {
            return None;
        };

        let previous = self.get(tier);
        if rank.league_points > previous {
            *self.slot(tier) = rank.league_points;
            Some(previous)
        } else {
            None
        }
    }

    /// Element-wise maximum of two cap sets.
    pub fn merge(self, other: LadderCaps) -> Self {
        Self {
            master: self.get(ApexTier::Master).max(other.get(ApexTier::Master)),
            grandmaster: self
                .get(ApexTier::Grandmaster)
                .max(other.get(ApexTier::Grandmaster)),
            challenger: self
                .get(ApexTier::Challenger)
                .max(other.get(ApexTier::Challenger)),
        }
    }
}
