use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::ArticleId;
use crate::store::mvi::StoreState;

/// Key under which an article's count is stored.
pub fn article_key(article_id: ArticleId) -> String {
    format!("article:{}", article_id)
}

/// Map from [`article_key`] to like count.
///
/// The map sits behind an `Arc`: a transition that leaves the counts
/// alone hands back the same allocation, so observers can use
/// [`GoodState::ptr_eq`] as a cheap change check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoodState {
    counts: Arc<BTreeMap<String, u64>>,
}

impl StoreState for GoodState {}

impl GoodState {
    pub fn from_map(counts: BTreeMap<String, u64>) -> Self {
        Self {
            counts: Arc::new(counts),
        }
    }

    /// Count for an article; absent entries read as zero.
    pub fn get(&self, article_id: ArticleId) -> u64 {
        self.counts
            .get(&article_key(article_id))
            .copied()
            .unwrap_or(0)
    }

    pub fn as_map(&self) -> &BTreeMap<String, u64> {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// True when both states share the same underlying map.
    pub fn ptr_eq(&self, other: &GoodState) -> bool {
        Arc::ptr_eq(&self.counts, &other.counts)
    }

    pub(super) fn into_inner(self) -> Arc<BTreeMap<String, u64>> {
        self.counts
    }

    pub(super) fn from_arc(counts: Arc<BTreeMap<String, u64>>) -> Self {
        Self { counts }
    }
}
