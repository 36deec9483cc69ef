use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    caps::LadderCaps,
    tier::{Division, Tier},
    LadderError,
};

/// One ladder position: tier, division (divisioned tiers only) and league
/// points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankValue {
    pub tier: Tier,
    #[serde(default)]
    pub division: Option<Division>,
    pub league_points: u32,
}

impl RankValue {
    pub fn divisioned(tier: Tier, division: Division, league_points: u32) -> Self {
        Self {
            tier,
            division: Some(division),
            league_points,
        }
    }

    pub fn apex(tier: Tier, league_points: u32) -> Self {
        Self {
            tier,
            division: None,
            league_points,
        }
    }
}

impl fmt::Display for RankValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.division {
            Some(division) if self.tier.has_divisions() => {
                write!(f, "{} {} {}", self.tier, division, self.league_points)
            }
            _ => write!(f, "{} {}", self.tier, self.league_points),
        }
    }
}

/// Parses `"GOLD II 45"` or `"MASTER 250"`.
impl FromStr for RankValue {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LadderError::InvalidRank(s.to_string());
        let parts: Vec<&str> = s.split_whitespace().collect();

        let (tier, division, lp) = match parts.as_slice() {
            [tier, division, lp] => (*tier, Some(*division), *lp),
            [tier, lp] => (*tier, None, *lp),
            _ => return Err(invalid()),
        };

        let tier = tier.parse::<Tier>().map_err(|_| invalid())?;
        let division = division
            .map(|d| d.parse::<Division>().map_err(|_| invalid()))
            .transpose()?;
        let league_points = lp.parse::<u32>().map_err(|_| invalid())?;

        Ok(Self {
            tier,
            division,
            league_points,
        })
    }
}

/// Best and worst rank held during one snapshot period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSnapshot {
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
    pub peak_rank: RankValue,
    pub trough_rank: RankValue,
}

/// A snapshot with its numeric ladder positions attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSnapshot {
    #[serde(flatten)]
    pub snapshot: RankedSnapshot,
    pub numeric_rank_peak: f64,
    pub numeric_rank_trough: f64,
    /// `[trough, peak]`, the band an area chart fills.
    pub numeric_rank_range: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderSeries {
    pub snapshots: Vec<NormalizedSnapshot>,
    pub caps: LadderCaps,
}
