use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of an article as issued by the server.
pub type ArticleId = u64;

/// A full blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    /// Body text. Line breaks are significant.
    pub text: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

/// List entry for an article, carrying its current good count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub good: u64,
}

/// Response body of the like endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodResponse {
    pub good: u64,
}

/// Authoritative good count for one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodCount {
    pub id: ArticleId,
    pub good: u64,
}

impl From<&ArticleSummary> for GoodCount {
    fn from(summary: &ArticleSummary) -> Self {
        Self {
            id: summary.id,
            good: summary.good,
        }
    }
}
