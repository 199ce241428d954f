use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::api::{ApiClient, ApiError, Article, ArticleId, ArticleSummary};
use crate::store::selection::SelectionIntent;

use super::good::GoodCountHook;

/// Data that may still be in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    /// Nothing to show yet; views render a loading indicator.
    Unset,
    Ready(T),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Unset
    }
}

impl<T> Loadable<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Loadable::Unset)
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            Loadable::Unset => None,
        }
    }

    pub fn into_ready(self) -> Option<T> {
        match self {
            Loadable::Ready(value) => Some(value),
            Loadable::Unset => None,
        }
    }
}

/// Fetches one article and keeps it until a different id is requested.
pub struct ArticleLoader<C> {
    client: Arc<C>,
    requested: Arc<Mutex<Option<ArticleId>>>,
    state: Arc<watch::Sender<Loadable<Article>>>,
}

impl<C> Clone for ArticleLoader<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            requested: Arc::clone(&self.requested),
            state: Arc::clone(&self.state),
        }
    }
}

impl<C: ApiClient> ArticleLoader<C> {
    pub fn new(client: Arc<C>) -> Self {
        let (state, _) = watch::channel(Loadable::Unset);
        Self {
            client,
            requested: Arc::new(Mutex::new(None)),
            state: Arc::new(state),
        }
    }

    /// Reset to `Unset` and fetch `article_id`.
    ///
    /// On failure the state stays `Unset`. A response that arrives after a
    /// different id was requested is dropped.
    pub async fn load(&self, article_id: ArticleId) -> Result<(), ApiError> {
        *self.requested.lock() = Some(article_id);
        self.state.send_replace(Loadable::Unset);

        let article = match self.client.fetch_article(article_id).await {
            Ok(article) => article,
            Err(err) => {
                tracing::warn!(article_id, error = %err, "Failed to fetch article");
                return Err(err);
            }
        };

        let requested = self.requested.lock();
        if *requested == Some(article_id) {
            self.state.send_replace(Loadable::Ready(article));
        } else {
            let newer = *requested;
            tracing::debug!(article_id, ?newer, "Dropping stale article response");
        }
        Ok(())
    }

    /// Fetch `article_id` unless it is already the requested id.
    pub async fn switch_to(&self, article_id: ArticleId) -> Result<(), ApiError> {
        if self.requested() == Some(article_id) {
            return Ok(());
        }
        self.load(article_id).await
    }

    pub fn requested(&self) -> Option<ArticleId> {
        *self.requested.lock()
    }

    pub fn current(&self) -> Loadable<Article> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Loadable<Article>> {
        self.state.subscribe()
    }
}

/// Fetches the article list and seeds the store from it.
///
/// A successful load replaces every good count with the list's values and
/// selects the first article if nothing is selected yet.
pub struct ArticleListLoader<C> {
    good: GoodCountHook<C>,
    state: Arc<watch::Sender<Loadable<Vec<ArticleSummary>>>>,
}

impl<C> Clone for ArticleListLoader<C> {
    fn clone(&self) -> Self {
        Self {
            good: self.good.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<C: ApiClient> ArticleListLoader<C> {
    pub fn new(good: GoodCountHook<C>) -> Self {
        let (state, _) = watch::channel(Loadable::Unset);
        Self {
            good,
            state: Arc::new(state),
        }
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        let articles = match self.good.client().fetch_articles().await {
            Ok(articles) => articles,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to fetch article list");
                return Err(err);
            }
        };
        tracing::debug!(count = articles.len(), "Article list loaded");

        self.good.set_good_counts(&articles);
        if let Some(first) = articles.first() {
            self.good
                .store()
                .dispatch(SelectionIntent::SelectFirst { article_id: first.id }.into());
        }
        self.state.send_replace(Loadable::Ready(articles));
        Ok(())
    }

    pub fn current(&self) -> Loadable<Vec<ArticleSummary>> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Loadable<Vec<ArticleSummary>>> {
        self.state.subscribe()
    }
}
