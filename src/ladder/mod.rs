pub mod caps;
pub mod models;
pub mod normalizer;
pub mod repository;
pub mod service;
pub mod tier;

mod errors;

pub use caps::{LadderCaps, CAP_SEED};
pub use errors::LadderError;
pub use models::{LadderSeries, NormalizedSnapshot, RankValue, RankedSnapshot};
pub use normalizer::{normalize, numeric_rank, raise_caps};
pub use repository::{InMemoryLadderCapStore, LadderCapStore};
pub use service::LadderHistoryService;
pub use tier::{ApexTier, Division, Tier, TierClass};
