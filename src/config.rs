use crate::timeline::{AdvantageMode, TeamSide};

/// Chart settings for the command-line caller.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    /// Team whose advantage drives the chart scalars.
    pub chart_team: TeamSide,
    pub chart_mode: AdvantageMode,
}

impl AnalyticsConfig {
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source, falling back to
    /// defaults for missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let chart_team = lookup("CHART_TEAM")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.chart_team);
        let chart_mode = lookup("CHART_MODE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.chart_mode);

        Self {
            chart_team,
            chart_mode,
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            chart_team: TeamSide::Blue,
            chart_mode: AdvantageMode::Absolute,
        }
    }
}
