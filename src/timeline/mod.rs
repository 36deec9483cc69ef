pub mod advantage;
pub mod chart;
pub mod models;

mod errors;

use serde::{Deserialize, Serialize};
use tracing::instrument;

pub use advantage::{annotate_frames, percentage_advantage};
pub use chart::{
    advantage_series, axis_domain, chart_params, gradient_offset, AxisDomain, ChartParams,
};
pub use errors::TimelineError;
pub use models::*;

/// Annotated frames plus the chart scalars for one team's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineAdvantage {
    pub frames: Vec<AnnotatedFrame>,
    #[serde(flatten)]
    pub chart: ChartParams,
}

#[instrument(skip(roster, frames), fields(frames = frames.len()))]
pub fn derive_timeline(
    roster: &TeamRoster,
    frames: &[TimelineFrame],
    side: TeamSide,
    mode: AdvantageMode,
) -> Result<TimelineAdvantage, TimelineError> {
    let frames = annotate_frames(roster, frames)?;
    let chart = chart_params(&frames, side, mode);
    Ok(TimelineAdvantage { frames, chart })
}
