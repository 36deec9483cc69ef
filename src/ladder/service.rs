use std::sync::Arc;

use tracing::instrument;

use super::{
    models::{LadderSeries, RankedSnapshot},
    normalizer::{normalize, raise_caps},
    repository::LadderCapStore,
    LadderError,
};

/// Normalizes rank histories against caps kept in a [`LadderCapStore`].
pub struct LadderHistoryService {
    store: Arc<dyn LadderCapStore>,
}

impl LadderHistoryService {
    pub fn new(store: Arc<dyn LadderCapStore>) -> Self {
        Self { store }
    }

    /// Loads the stored caps for `history_key`, raises them from `snapshots`,
    /// writes them back and normalizes against the stored result.
    #[instrument(skip(self, snapshots), fields(snapshots = snapshots.len()))]
    pub fn normalize_history(
        &self,
        history_key: &str,
        snapshots: &[RankedSnapshot],
    ) -> Result<LadderSeries, LadderError> {
        let prior = self.store.load(history_key)?.unwrap_or_default();
        let observed = raise_caps(snapshots, prior);
        let caps = self.store.raise(history_key, observed)?;
        normalize(snapshots, caps)
    }

    pub fn reset_history(&self, history_key: &str) -> Result<(), LadderError> {
        self.store.reset(history_key)
    }
}
