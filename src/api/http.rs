use std::time::Duration;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{Article, ArticleId, ArticleSummary, GoodResponse};

/// [`ApiClient`] speaking JSON over HTTP.
///
/// Endpoints, relative to the configured base URL:
/// - `GET /articles/{id}`
/// - `GET /articles`
/// - `POST /articles/{id}/good`
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(|source| ApiError::ClientBuild { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "API request");

        let response = self
            .client
            .request(method, &url)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await.map_err(|source| ApiError::Request {
            url: url.clone(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

impl ApiClient for HttpApiClient {
    async fn fetch_article(&self, id: ArticleId) -> Result<Article, ApiError> {
        self.request_json(Method::GET, &format!("/articles/{}", id))
            .await
    }

    async fn fetch_articles(&self) -> Result<Vec<ArticleSummary>, ApiError> {
        self.request_json(Method::GET, "/articles").await
    }

    async fn increment_good(&self, id: ArticleId) -> Result<GoodResponse, ApiError> {
        self.request_json(Method::POST, &format!("/articles/{}/good", id))
            .await
    }
}
