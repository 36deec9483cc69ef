use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use super::ImpactError;

pub type ParticipantId = u32;
pub type TeamId = u16;

/// Stats the impact factors read from a participant's end-of-match record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Stat {
    #[strum(serialize = "totalDamageDealtToChampions")]
    DamageToChampions,
    #[strum(serialize = "damageDealtToObjectives")]
    DamageToObjectives,
    #[strum(serialize = "damageDealtToTurrets")]
    DamageToTurrets,
    #[strum(serialize = "kills")]
    Kills,
    #[strum(serialize = "assists")]
    Assists,
    #[strum(serialize = "deaths")]
    Deaths,
    #[strum(serialize = "visionScore")]
    VisionScore,
    #[strum(serialize = "totalHeal")]
    TotalHeal,
    #[strum(serialize = "timeCCingOthers")]
    CrowdControlTime,
}

/// Per-participant stat bundle as delivered by the match-data feed.
///
/// Every stat is optional on the wire. The scorer refuses to score a
/// participant with a missing stat instead of treating it as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub participant_id: ParticipantId,
    pub team_id: TeamId,
    #[serde(default, rename = "totalDamageDealtToChampions")]
    pub damage_to_champions: Option<f64>,
    #[serde(default, rename = "damageDealtToObjectives")]
    pub damage_to_objectives: Option<f64>,
    #[serde(default, rename = "damageDealtToTurrets")]
    pub damage_to_turrets: Option<f64>,
    #[serde(default)]
    pub kills: Option<f64>,
    #[serde(default)]
    pub assists: Option<f64>,
    #[serde(default)]
    pub deaths: Option<f64>,
    #[serde(default)]
    pub vision_score: Option<f64>,
    #[serde(default)]
    pub total_heal: Option<f64>,
    #[serde(default, rename = "timeCCingOthers")]
    pub crowd_control_time: Option<f64>,
}

impl PlayerStats {
    pub fn stat(&self, stat: Stat) -> Option<f64> {
        match stat {
            Stat::DamageToChampions => self.damage_to_champions,
            Stat::DamageToObjectives => self.damage_to_objectives,
            Stat::DamageToTurrets => self.damage_to_turrets,
            Stat::Kills => self.kills,
            Stat::Assists => self.assists,
            Stat::Deaths => self.deaths,
            Stat::VisionScore => self.vision_score,
            Stat::TotalHeal => self.total_heal,
            Stat::CrowdControlTime => self.crowd_control_time,
        }
    }

    fn require(&self, stat: Stat) -> Result<f64, ImpactError> {
        self.stat(stat).ok_or(ImpactError::MissingStat {
            participant_id: self.participant_id,
            stat,
        })
    }
}

/// A fully populated stat line. Also used for team-wide sums.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatLine {
    pub damage_to_champions: f64,
    pub damage_to_objectives: f64,
    pub damage_to_turrets: f64,
    pub kills: f64,
    pub assists: f64,
    pub deaths: f64,
    pub vision_score: f64,
    pub total_heal: f64,
    pub crowd_control_time: f64,
}

impl StatLine {
    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::DamageToChampions => self.damage_to_champions,
            Stat::DamageToObjectives => self.damage_to_objectives,
            Stat::DamageToTurrets => self.damage_to_turrets,
            Stat::Kills => self.kills,
            Stat::Assists => self.assists,
            Stat::Deaths => self.deaths,
            Stat::VisionScore => self.vision_score,
            Stat::TotalHeal => self.total_heal,
            Stat::CrowdControlTime => self.crowd_control_time,
        }
    }

    /// Sums stat lines field by field.
    pub fn total<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a StatLine>,
    {
        lines.into_iter().fold(StatLine::default(), |acc, line| StatLine {
            damage_to_champions: acc.damage_to_champions + line.damage_to_champions,
            damage_to_objectives: acc.damage_to_objectives + line.damage_to_objectives,
            damage_to_turrets: acc.damage_to_turrets + line.damage_to_turrets,
            kills: acc.kills + line.kills,
            assists: acc.assists + line.assists,
            deaths: acc.deaths + line.deaths,
            vision_score: acc.vision_score + line.vision_score,
            total_heal: acc.total_heal + line.total_heal,
            crowd_control_time: acc.crowd_control_time + line.crowd_control_time,
        })
    }
}

impl TryFrom<&PlayerStats> for StatLine {
    type Error = ImpactError;

    fn try_from(stats: &PlayerStats) -> Result<Self, Self::Error> {
        Ok(StatLine {
            damage_to_champions: stats.require(Stat::DamageToChampions)?,
            damage_to_objectives: stats.require(Stat::DamageToObjectives)?,
            damage_to_turrets: stats.require(Stat::DamageToTurrets)?,
            kills: stats.require(Stat::Kills)?,
            assists: stats.require(Stat::Assists)?,
            deaths: stats.require(Stat::Deaths)?,
            vision_score: stats.require(Stat::VisionScore)?,
            total_heal: stats.require(Stat::TotalHeal)?,
            crowd_control_time: stats.require(Stat::CrowdControlTime)?,
        })
    }
}

/// One finalized match: every participant of both teams.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    #[serde(default)]
    pub match_id: String,
    pub participants: Vec<PlayerStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub factor: String,
    pub value: f64,
}

/// Impact augmentation attached to one participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerImpact {
    pub participant_id: ParticipantId,
    pub team_id: TeamId,
    pub impact: f64,
    pub impact_rank: u32,
    pub contributions: Vec<FactorContribution>,
}
