use crate::api::{ArticleId, GoodCount};
use crate::store::mvi::Intent;

/// Intents handled by the good-count reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoodIntent {
    /// Speculatively add one like; an absent entry counts as zero.
    Increment { article_id: ArticleId },

    /// Replace the whole map with the given counts.
    SetAll { counts: Vec<GoodCount> },

    /// Overwrite one article's count with an authoritative value.
    Set { article_id: ArticleId, good: u64 },
}

impl Intent for GoodIntent {}
