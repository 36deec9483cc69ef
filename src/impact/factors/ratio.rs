use super::super::{ImpactFactor, Stat, StatLine, TeamContext};

/// How a team-wide sum is kept away from zero before dividing by it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Smoothing {
    /// Always add a constant to the team sum.
    Additive(f64),
    /// Replace the team sum with a constant only when the sum is exactly zero.
    IfZero(f64),
}

impl Smoothing {
    pub fn apply(&self, team_sum: f64) -> f64 {
        match *self {
            Smoothing::Additive(constant) => team_sum + constant,
            Smoothing::IfZero(fallback) if team_sum == 0.0 => fallback,
            Smoothing::IfZero(_) => team_sum,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Contribution,
    Detriment,
}

/// `player[numerator] / smoothed(team[denominator]) * weight`, negated for
/// detriments.
#[derive(Debug, Clone)]
pub struct RatioFactor {
    name: String,
    numerator: Stat,
    denominator: Stat,
    smoothing: Smoothing,
    weight: f64,
    polarity: Polarity,
}

impl RatioFactor {
    pub fn new(stat: Stat, smoothing: Smoothing, weight: f64) -> Self {
        Self {
            name: stat.to_string(),
            numerator: stat,
            denominator: stat,
            smoothing,
            weight,
            polarity: Polarity::Contribution,
        }
    }

    /// Divide by the team sum of another stat instead of the numerator's own.
    pub fn over(mut self, denominator: Stat) -> Self {
        self.denominator = denominator;
        self
    }

    pub fn detriment(mut self) -> Self {
        self.polarity = Polarity::Detriment;
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}

impl ImpactFactor for RatioFactor {
    fn name(&self) -> &str {
        &self.name
    }

    fn contribution(&self, player: &StatLine, context: &TeamContext) -> f64 {
        let denominator = self.smoothing.apply(context.totals.get(self.denominator));
        let value = player.get(self.numerator) / denominator * self.weight;
        match self.polarity {
            Polarity::Contribution => value,
            Polarity::Detriment => -value,
        }
    }
}
