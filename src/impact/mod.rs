pub mod factors;
pub mod models;
pub mod scorer;

mod errors;

pub use errors::ImpactError;
pub use factors::{default_factors, Polarity, RatioFactor, Smoothing};
pub use models::*;
pub use scorer::{ImpactScorer, ImpactScorerBuilder};

/// Team-wide state a factor sees while scoring one participant.
pub struct TeamContext<'a> {
    pub totals: &'a StatLine,
}

impl<'a> TeamContext<'a> {
    pub fn new(totals: &'a StatLine) -> Self {
        Self { totals }
    }
}

/// One weighted term of the impact score.
///
/// The returned value is already signed: detriments return a negative
/// contribution so the scorer can simply add every term.
pub trait ImpactFactor: Send + Sync {
    fn name(&self) -> &str;

    fn contribution(&self, player: &StatLine, context: &TeamContext) -> f64;
}
