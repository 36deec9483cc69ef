use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimelineError {
    #[error("frame {frame_index} has no participant frames")]
    MissingParticipantFrames { frame_index: usize },

    #[error("invalid roster: {0}")]
    InvalidRoster(String),
}
