//! Blog API: data types, the client contract and its HTTP implementation.

mod client;
mod error;
mod http;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use http::HttpApiClient;
pub use types::{Article, ArticleId, ArticleSummary, GoodCount, GoodResponse};
