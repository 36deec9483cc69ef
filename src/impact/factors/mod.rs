mod ratio;

use std::sync::Arc;

pub use ratio::{Polarity, RatioFactor, Smoothing};

use super::{ImpactFactor, Stat};

pub const DAMAGE_SMOOTHING: f64 = 1000.0;
pub const COUNT_SMOOTHING: f64 = 5.0;
pub const DEATH_SMOOTHING: f64 = 3.0;

pub const KILL_WEIGHT: f64 = 2.5;
/// Assists are worth a fixed share of a kill.
pub const ASSIST_WEIGHT: f64 = 0.6 * KILL_WEIGHT;
pub const DEATH_WEIGHT: f64 = 2.0;

pub const ASSIST_FACTOR: &str = "assistsPerTeamKill";

/// The eight contribution factors followed by the death detriment.
pub fn default_factors() -> Vec<Arc<dyn ImpactFactor>> {
    vec![
        Arc::new(RatioFactor::new(
            Stat::DamageToChampions,
            Smoothing::Additive(DAMAGE_SMOOTHING),
            1.0,
        )),
        Arc::new(RatioFactor::new(
            Stat::DamageToObjectives,
            Smoothing::Additive(DAMAGE_SMOOTHING),
            0.5,
        )),
        Arc::new(RatioFactor::new(
            Stat::DamageToTurrets,
            Smoothing::Additive(DAMAGE_SMOOTHING),
            0.7,
        )),
        Arc::new(RatioFactor::new(
            Stat::Kills,
            Smoothing::Additive(COUNT_SMOOTHING),
            KILL_WEIGHT,
        )),
        Arc::new(RatioFactor::new(
            Stat::VisionScore,
            Smoothing::IfZero(1.0),
            1.0,
        )),
        Arc::new(RatioFactor::new(
            Stat::TotalHeal,
            Smoothing::Additive(DAMAGE_SMOOTHING),
            0.3,
        )),
        Arc::new(RatioFactor::new(
            Stat::CrowdControlTime,
            Smoothing::Additive(COUNT_SMOOTHING),
            0.3,
        )),
        // assists share the kill denominator
        Arc::new(
            RatioFactor::new(
                Stat::Assists,
                Smoothing::Additive(COUNT_SMOOTHING),
                ASSIST_WEIGHT,
            )
            .over(Stat::Kills)
            .named(ASSIST_FACTOR),
        ),
        Arc::new(
            RatioFactor::new(
                Stat::Deaths,
                Smoothing::Additive(DEATH_SMOOTHING),
                DEATH_WEIGHT,
            )
            .detriment(),
        ),
    ]
}
