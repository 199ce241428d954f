use std::future::Future;

use super::error::ApiError;
use super::types::{Article, ArticleId, ArticleSummary, GoodResponse};

/// Contract of the blog backend consumed by the hooks.
///
/// Implementations must be shareable across tasks; every call is an
/// independent request with no client-side caching.
pub trait ApiClient: Send + Sync + 'static {
    /// Fetch one article by id.
    fn fetch_article(
        &self,
        id: ArticleId,
    ) -> impl Future<Output = Result<Article, ApiError>> + Send;

    /// Fetch all article summaries in server order.
    fn fetch_articles(&self) -> impl Future<Output = Result<Vec<ArticleSummary>, ApiError>> + Send;

    /// Register one like for an article and return the updated count.
    fn increment_good(
        &self,
        id: ArticleId,
    ) -> impl Future<Output = Result<GoodResponse, ApiError>> + Send;
}
