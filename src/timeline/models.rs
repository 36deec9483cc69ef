use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::impact::ParticipantId;

use super::TimelineError;

/// One participant's state inside a frame. Gold is absent until tracking
/// starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantFrame {
    pub participant_id: ParticipantId,
    #[serde(default)]
    pub total_gold: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineFrame {
    /// Milliseconds since the start of the match.
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub participant_frames: Option<Vec<ParticipantFrame>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum TeamSide {
    #[serde(rename = "100")]
    #[strum(serialize = "100")]
    Blue,
    #[serde(rename = "200")]
    #[strum(serialize = "200")]
    Red,
}

/// Whether chart values are raw gold differences or percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AdvantageMode {
    Absolute,
    Percentage,
}

/// Participant ids of each side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRoster {
    pub team100: Vec<ParticipantId>,
    pub team200: Vec<ParticipantId>,
}

impl TeamRoster {
    pub fn new(team100: Vec<ParticipantId>, team200: Vec<ParticipantId>) -> Self {
        Self { team100, team200 }
    }

    pub fn validate(&self) -> Result<(), TimelineError> {
        if self.team100.is_empty() || self.team200.is_empty() {
            return Err(TimelineError::InvalidRoster(
                "both teams need at least one participant".to_string(),
            ));
        }

        let blue: HashSet<_> = self.team100.iter().collect();
        if let Some(shared) = self.team200.iter().find(|id| blue.contains(id)) {
            return Err(TimelineError::InvalidRoster(format!(
                "participant {shared} is listed on both teams"
            )));
        }

        Ok(())
    }

    pub fn side_of(&self, participant_id: ParticipantId) -> Option<TeamSide> {
        if self.team100.contains(&participant_id) {
            Some(TeamSide::Blue)
        } else if self.team200.contains(&participant_id) {
            Some(TeamSide::Red)
        } else {
            None
        }
    }
}

/// A frame with both teams' gold and advantages attached. The input
/// frame is carried unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedFrame {
    #[serde(flatten)]
    pub frame: TimelineFrame,
    pub team100_gold: i64,
    pub team200_gold: i64,
    pub team100_adv: i64,
    pub team200_adv: i64,
    pub team100_perc_adv: f64,
    pub team200_perc_adv: f64,
}

impl AnnotatedFrame {
    pub fn advantage(&self, side: TeamSide, mode: AdvantageMode) -> f64 {
        match (side, mode) {
            (TeamSide::Blue, AdvantageMode::Absolute) => self.team100_adv as f64,
            (TeamSide::Red, AdvantageMode::Absolute) => self.team200_adv as f64,
            (TeamSide::Blue, AdvantageMode::Percentage) => self.team100_perc_adv,
            (TeamSide::Red, AdvantageMode::Percentage) => self.team200_perc_adv,
        }
    }
}
