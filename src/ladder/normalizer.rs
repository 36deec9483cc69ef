use tracing::{debug, info, instrument};

use super::{
    caps::LadderCaps,
    models::{LadderSeries, NormalizedSnapshot, RankValue, RankedSnapshot},
    tier::{Tier, TierClass},
    LadderError,
};

pub const DIVISIONS_PER_TIER: f64 = 4.0;
/// Where a full-LP divisioned rank lands, just short of the next division.
pub const FULL_LP_FRACTION: f64 = 0.9999;

const APEX_BASE: f64 = Tier::DIVISIONED_COUNT as f64 * DIVISIONS_PER_TIER;

/// Pass 1: raise each apex cap to the highest peak league points observed.
pub fn raise_caps(snapshots: &[RankedSnapshot], prior: LadderCaps) -> LadderCaps {
    let mut caps = prior;
    for snapshot in snapshots {
        if let Some(previous) = caps.observe(&snapshot.peak_rank) {
            info!(
                tier = %snapshot.peak_rank.tier,
                previous,
                cap = snapshot.peak_rank.league_points,
                "Raised apex league point cap"
            );
        }
    }
    caps
}

/// Pass 2 for one rank: its position on the continuous ladder axis.
///
/// Divisioned tiers occupy `4 * tier + division + lp / 100`, apex tiers
/// `24 + 4 * tier + 4 * lp / cap`. An apex rank sitting at its cap has a
/// term of exactly 4, so it ties with 0 LP in the next apex tier.
pub fn numeric_rank(rank: &RankValue, caps: &LadderCaps) -> Result<f64, LadderError> {
    match rank.tier.class() {
        TierClass::Divisioned(tier_index) => {
            let division = rank
                .division
                .ok_or(LadderError::MissingDivision { tier: rank.tier })?;
            let lp_fraction = if rank.league_points >= 100 {
                FULL_LP_FRACTION
            } else {
                f64::from(rank.league_points) / 100.0
            };
            Ok(DIVISIONS_PER_TIER * f64::from(tier_index)
                + f64::from(division.ordinal())
                + lp_fraction)
        }
        TierClass::Apex(tier) => {
            let cap = f64::from(caps.get(tier));
            Ok(APEX_BASE
                + DIVISIONS_PER_TIER * f64::from(tier.index())
                + f64::from(rank.league_points) / cap * DIVISIONS_PER_TIER)
        }
    }
}

/// Runs both passes over a chronological history. `prior` is the cap set
/// returned by the previous call for the same history.
#[instrument(skip_all, fields(snapshots = snapshots.len()))]
pub fn normalize(
    snapshots: &[RankedSnapshot],
    prior: LadderCaps,
) -> Result<LadderSeries, LadderError> {
    let caps = raise_caps(snapshots, prior);

    let normalized = snapshots
        .iter()
        .map(|snapshot| {
            let peak = numeric_rank(&snapshot.peak_rank, &caps)?;
            let trough = numeric_rank(&snapshot.trough_rank, &caps)?;
            Ok(NormalizedSnapshot {
                snapshot: snapshot.clone(),
                numeric_rank_peak: peak,
                numeric_rank_trough: trough,
                numeric_rank_range: [trough, peak],
            })
        })
        .collect::<Result<Vec<_>, LadderError>>()?;

    debug!(?caps, "Normalized rank history");

    Ok(LadderSeries {
        snapshots: normalized,
        caps,
    })
}
