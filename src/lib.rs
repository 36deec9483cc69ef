// Match analytics derivation engine
// Turns match telemetry into impact scores, ladder positions and gold-advantage chart data

pub mod config;
pub mod impact;
pub mod ladder;
pub mod shared;
pub mod timeline;

// Re-export the three entry points and their main types
pub use config::AnalyticsConfig;
pub use impact::{ImpactError, ImpactScorer, MatchRecord, PlayerImpact, PlayerStats};
pub use ladder::{normalize, LadderCaps, LadderError, LadderSeries, RankedSnapshot};
pub use shared::AppError;
pub use timeline::{
    derive_timeline, AdvantageMode, TeamRoster, TeamSide, TimelineAdvantage, TimelineError,
    TimelineFrame,
};
