use thiserror::Error;

use crate::impact::ImpactError;
use crate::ladder::LadderError;
use crate::timeline::TimelineError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Impact error: {0}")]
    Impact(#[from] ImpactError),

    #[error("Ladder error: {0}")]
    Ladder(#[from] LadderError),

    #[error("Timeline error: {0}")]
    Timeline(#[from] TimelineError),

    #[error("Invalid input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Usage: {0}")]
    Usage(String),
}
