use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, instrument};

use super::{
    default_factors, FactorContribution, ImpactError, ImpactFactor, MatchRecord, ParticipantId,
    PlayerImpact, PlayerStats, StatLine, TeamContext, TeamId,
};

pub struct ImpactScorer {
    factors: Vec<Arc<dyn ImpactFactor>>,
}

impl ImpactScorer {
    pub fn builder() -> ImpactScorerBuilder {
        ImpactScorerBuilder::new()
    }

    pub fn factors(&self) -> Vec<Arc<dyn ImpactFactor>> {
        self.factors.clone()
    }

    /// Scores one team. The output keeps the input order; `impact_rank` is
    /// the 1-based position after a stable descending sort by impact. Every
    /// player must carry the same `team_id`.
    #[instrument(skip_all, fields(players = players.len()))]
    pub fn score_team(&self, players: &[PlayerStats]) -> Result<Vec<PlayerImpact>, ImpactError> {
        let members: Vec<&PlayerStats> = players.iter().collect();
        self.score_members(&members)
    }

    /// Scores both teams of a match and returns them team by team, lower
    /// team id first.
    #[instrument(skip_all, fields(match_id = %record.match_id))]
    pub fn score_match(&self, record: &MatchRecord) -> Result<Vec<PlayerImpact>, ImpactError> {
        let mut teams: BTreeMap<TeamId, Vec<&PlayerStats>> = BTreeMap::new();
        for player in &record.participants {
            teams.entry(player.team_id).or_default().push(player);
        }

        if teams.len() != 2 {
            return Err(ImpactError::TeamCount {
                found: teams.keys().copied().collect(),
            });
        }

        let mut scored = Vec::with_capacity(record.participants.len());
        for members in teams.values() {
            scored.extend(self.score_members(members)?);
        }
        Ok(scored)
    }

    fn score_members(&self, players: &[&PlayerStats]) -> Result<Vec<PlayerImpact>, ImpactError> {
        if players.is_empty() {
            return Err(ImpactError::EmptyTeam);
        }

        let team_id = players[0].team_id;
        let mut seen = HashSet::with_capacity(players.len());
        for player in players {
            if player.team_id != team_id {
                return Err(ImpactError::MixedTeams {
                    participant_id: player.participant_id,
                    expected: team_id,
                    found: player.team_id,
                });
            }
            if !seen.insert(player.participant_id) {
                return Err(ImpactError::DuplicateParticipant(player.participant_id));
            }
        }

        let lines = players
            .iter()
            .map(|player| StatLine::try_from(*player))
            .collect::<Result<Vec<_>, _>>()?;
        let totals = StatLine::total(&lines);
        let context = TeamContext::new(&totals);

        let breakdowns: Vec<Vec<FactorContribution>> = lines
            .iter()
            .map(|line| self.breakdown(line, &context))
            .collect();
        let impacts: Vec<f64> = breakdowns
            .iter()
            .map(|parts| parts.iter().map(|part| part.value).sum())
            .collect();

        let ranks = rank_by_impact(players, &impacts);

        let scored: Vec<PlayerImpact> = players
            .iter()
            .zip(impacts)
            .zip(breakdowns)
            .map(|((player, impact), contributions)| PlayerImpact {
                participant_id: player.participant_id,
                team_id: player.team_id,
                impact,
                impact_rank: ranks
                    .get(&player.participant_id)
                    .copied()
                    .unwrap_or_default(),
                contributions,
            })
            .collect();

        debug!(
            team_id,
            players = scored.len(),
            "Scored team impact"
        );

        Ok(scored)
    }

    fn breakdown(&self, line: &StatLine, context: &TeamContext) -> Vec<FactorContribution> {
        self.factors
            .iter()
            .map(|factor| FactorContribution {
                factor: factor.name().to_string(),
                value: factor.contribution(line, context),
            })
            .collect()
    }
}

impl Default for ImpactScorer {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Stable descending sort, so equal impacts keep their input order.
fn rank_by_impact(players: &[&PlayerStats], impacts: &[f64]) -> HashMap<ParticipantId, u32> {
    let mut order: Vec<usize> = (0..players.len()).collect();
    order.sort_by(|&a, &b| impacts[b].total_cmp(&impacts[a]));

    order
        .into_iter()
        .enumerate()
        .map(|(position, index)| (players[index].participant_id, position as u32 + 1))
        .collect()
}

pub struct ImpactScorerBuilder {
    factors: Vec<Arc<dyn ImpactFactor>>,
}

impl ImpactScorerBuilder {
    fn new() -> Self {
        Self {
            factors: default_factors(),
        }
    }

    /// Drops the built-in factor table.
    pub fn without_defaults(mut self) -> Self {
        self.factors.clear();
        self
    }

    pub fn with_factor(mut self, factor: Arc<dyn ImpactFactor>) -> Self {
        self.factors.push(factor);
        self
    }

    pub fn build(self) -> ImpactScorer {
        ImpactScorer {
            factors: self.factors,
        }
    }
}
