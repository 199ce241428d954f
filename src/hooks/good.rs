use std::sync::Arc;

use crate::api::{ApiClient, ApiError, ArticleId, ArticleSummary, GoodCount};
use crate::store::good::{GoodIntent, GoodState};
use crate::store::AppStore;

/// Read/update access to good counts for view code.
pub struct GoodCountHook<C> {
    store: AppStore,
    client: Arc<C>,
}

impl<C> Clone for GoodCountHook<C> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: ApiClient> GoodCountHook<C> {
    pub fn new(store: AppStore, client: Arc<C>) -> Self {
        Self { store, client }
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    pub fn good_state(&self) -> GoodState {
        self.store.select(|state| state.good.clone())
    }

    /// Current count for an article, zero if unknown.
    pub fn good_count(&self, article_id: ArticleId) -> u64 {
        self.store.select(|state| state.good.get(article_id))
    }

    /// Replace all counts with the ones carried by a freshly fetched list.
    pub fn set_good_counts(&self, articles: &[ArticleSummary]) {
        self.store.dispatch(
            GoodIntent::SetAll {
                counts: articles.iter().map(GoodCount::from).collect(),
            }
            .into(),
        );
    }

    /// Like an article, showing the new count before the server confirms it.
    ///
    /// The count is bumped immediately, then replaced with the server's
    /// value on success or restored to the value read before the bump on
    /// failure. Returns the server's count.
    ///
    /// Two overlapping calls for the same article each restore their own
    /// snapshot on failure, so a failed call can undo a concurrent
    /// call's optimistic bump.
    pub async fn increment_good_count(&self, article_id: ArticleId) -> Result<u64, ApiError> {
        let rollback = self.good_count(article_id);

        self.store
            .dispatch(GoodIntent::Increment { article_id }.into());
        tracing::debug!(article_id, rollback, "Optimistic good increment");

        match self.client.increment_good(article_id).await {
            Ok(response) => {
                self.store.dispatch(
                    GoodIntent::Set {
                        article_id,
                        good: response.good,
                    }
                    .into(),
                );
                Ok(response.good)
            }
            Err(err) => {
                tracing::warn!(
                    article_id,
                    rollback,
                    error = %err,
                    "Good increment failed, restoring previous count"
                );
                self.store.dispatch(
                    GoodIntent::Set {
                        article_id,
                        good: rollback,
                    }
                    .into(),
                );
                Err(err)
            }
        }
    }
}
