use serde::{Deserialize, Serialize};
use tracing::debug;

use super::models::{AdvantageMode, AnnotatedFrame, TeamSide};

/// Axis bounds are rounded down to a multiple of the step, then one step is
/// added.
pub const PERCENTAGE_STEP: f64 = 10.0;
pub const ABSOLUTE_STEP: f64 = 5000.0;

/// Symmetric y-axis interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl From<AxisDomain> for [f64; 2] {
    fn from(domain: AxisDomain) -> Self {
        [domain.min, domain.max]
    }
}

impl From<[f64; 2]> for AxisDomain {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartParams {
    pub gradient_offset: f64,
    pub axis_domain: AxisDomain,
}

pub fn advantage_series(frames: &[AnnotatedFrame], side: TeamSide, mode: AdvantageMode) -> Vec<f64> {
    frames
        .iter()
        .map(|frame| frame.advantage(side, mode))
        .collect()
}

fn finite(values: &[f64]) -> impl Iterator<Item = f64> + '_ {
    let skipped = values.iter().filter(|v| !v.is_finite()).count();
    if skipped > 0 {
        debug!(skipped, "Ignoring non-finite values in chart series");
    }
    values.iter().copied().filter(|v| v.is_finite())
}

/// Gradient stop, from the top of the chart, where the advantage crosses
/// zero. 0 when the team never leads, 1 when it never trails.
pub fn gradient_offset(values: &[f64]) -> f64 {
    let data_max = finite(values).fold(f64::NEG_INFINITY, f64::max);
    let data_min = finite(values).fold(f64::INFINITY, f64::min);

    if data_max <= 0.0 {
        0.0
    } else if data_min >= 0.0 {
        1.0
    } else {
        data_max / (data_max - data_min)
    }
}

pub fn axis_domain(values: &[f64], mode: AdvantageMode) -> AxisDomain {
    let step = match mode {
        AdvantageMode::Percentage => PERCENTAGE_STEP,
        AdvantageMode::Absolute => ABSOLUTE_STEP,
    };
    let largest = finite(values).map(f64::abs).fold(0.0, f64::max);
    let bound = (largest / step).floor() * step + step;

    AxisDomain {
        min: -bound,
        max: bound,
    }
}

/// Gradient offset from the absolute gold series, axis domain from the
/// series in `mode`.
pub fn chart_params(frames: &[AnnotatedFrame], side: TeamSide, mode: AdvantageMode) -> ChartParams {
    let absolute = advantage_series(frames, side, AdvantageMode::Absolute);
    let plotted = match mode {
        AdvantageMode::Absolute => absolute.clone(),
        AdvantageMode::Percentage => advantage_series(frames, side, mode),
    };

    ChartParams {
        gradient_offset: gradient_offset(&absolute),
        axis_domain: axis_domain(&plotted, mode),
    }
}
