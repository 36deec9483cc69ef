use thiserror::Error;

use super::tier::Tier;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LadderError {
    #[error("rank in tier {tier} is missing its division")]
    MissingDivision { tier: Tier },

    #[error("invalid rank '{0}'")]
    InvalidRank(String),

    #[error("cap store error: {0}")]
    CapStore(String),
}
