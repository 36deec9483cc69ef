use thiserror::Error;

use super::models::{ParticipantId, Stat, TeamId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImpactError {
    #[error("participant {participant_id} is missing required stat '{stat}'")]
    MissingStat {
        participant_id: ParticipantId,
        stat: Stat,
    },

    #[error("cannot score an empty team")]
    EmptyTeam,

    #[error("participant {0} appears more than once in the same team")]
    DuplicateParticipant(ParticipantId),

    #[error("participant {participant_id} belongs to team {found}, not team {expected}")]
    MixedTeams {
        participant_id: ParticipantId,
        expected: TeamId,
        found: TeamId,
    },

    #[error("expected exactly two teams in a match, found {found:?}")]
    TeamCount { found: Vec<TeamId> },
}
