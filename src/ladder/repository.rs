use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{caps::LadderCaps, LadderError};

/// Where callers keep cap sets between normalizations, one per rank history
/// (typically player + queue).
pub trait LadderCapStore: Send + Sync {
    fn load(&self, history_key: &str) -> Result<Option<LadderCaps>, LadderError>;

    /// Merges `observed` into the stored caps and returns the result. The
    /// merge is an element-wise maximum, so a stale writer cannot lower a cap.
    fn raise(&self, history_key: &str, observed: LadderCaps) -> Result<LadderCaps, LadderError>;

    fn reset(&self, history_key: &str) -> Result<(), LadderError>;
}

#[derive(Debug, Default)]
pub struct InMemoryLadderCapStore {
    histories: Arc<RwLock<HashMap<String, LadderCaps>>>,
}

impl InMemoryLadderCapStore {
    pub fn new() -> Self {
        Self {
            histories: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn poisoned<E: std::fmt::Display>(err: E) -> LadderError {
    LadderError::CapStore(err.to_string())
}

impl LadderCapStore for InMemoryLadderCapStore {
    fn load(&self, history_key: &str) -> Result<Option<LadderCaps>, LadderError> {
        let histories = self.histories.read().map_err(poisoned)?;
        Ok(histories.get(history_key).copied())
    }

    fn raise(&self, history_key: &str, observed: LadderCaps) -> Result<LadderCaps, LadderError> {
        let mut histories = self.histories.write().map_err(poisoned)?;
        let stored = histories.entry(history_key.to_string()).or_default();
        *stored = stored.merge(observed);
        Ok(*stored)
    }

    fn reset(&self, history_key: &str) -> Result<(), LadderError> {
        let mut histories = self.histories.write().map_err(poisoned)?;
        histories.remove(history_key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::{
        models::RankValue,
        tier::{ApexTier, Tier},
    };

    fn caps_with_master(lp: u32) -> LadderCaps {
        let mut caps = LadderCaps::default();
        caps.observe(&RankValue::apex(Tier::Master, lp));
        caps
    }

    #[test]
    fn load_returns_none_for_unknown_history() {
        let store = InMemoryLadderCapStore::new();
        assert_eq!(store.load("nobody").unwrap(), None);
    }

    #[test]
    fn raise_never_lowers_stored_caps() {
        let store = InMemoryLadderCapStore::new();

        store.raise("player:solo", caps_with_master(480)).unwrap();
        let after = store.raise("player:solo", caps_with_master(250)).unwrap();

        assert_eq!(after.get(ApexTier::Master), 480);
        assert_eq!(store.load("player:solo").unwrap(), Some(after));
    }

    #[test]
    fn histories_are_independent() {
        let store = InMemoryLadderCapStore::new();
        store.raise("a", caps_with_master(700)).unwrap();

        assert_eq!(store.load("b").unwrap(), None);
    }

    #[test]
    fn reset_clears_history() {
        let store = InMemoryLadderCapStore::new();
        store.raise("player:flex", caps_with_master(300)).unwrap();

        store.reset("player:flex").unwrap();

        assert_eq!(store.load("player:flex").unwrap(), None);
    }
}
