//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_api;

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use blogreader::api::{ApiClient, ApiError, Article, ArticleId, ArticleSummary, GoodResponse};
use blogreader::store::AppStore;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use tokio::sync::oneshot;

pub type LikeReply = Result<GoodResponse, ApiError>;

// -- Fixtures -----------------------------------------------------------------

pub fn fixed_date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 7, day, 2, 56, 20).unwrap()
}

pub fn article(id: ArticleId) -> Article {
    Article {
        id,
        title: format!("Article {}", id),
        text: format!("Body of article {}.\nSecond line.", id),
        author: "Bob".to_string(),
        date: fixed_date(id as u32),
    }
}

pub fn summary(id: ArticleId, good: u64) -> ArticleSummary {
    ArticleSummary {
        id,
        title: format!("Article {}", id),
        date: fixed_date(id as u32),
        good,
    }
}

pub fn server_error(status: u16) -> ApiError {
    ApiError::Status {
        status,
        url: "http://fake/articles".to_string(),
    }
}

// -- Store helpers ------------------------------------------------------------

/// Wait until the store reports `expected` likes for `article_id`.
pub async fn wait_for_good(store: &AppStore, article_id: ArticleId, expected: u64) {
    let mut rx = store.subscribe();
    tokio::time::timeout(
        Duration::from_secs(1),
        rx.wait_for(|state| state.good.get(article_id) == expected),
    )
    .await
    .expect("timed out waiting for good count")
    .expect("store dropped");
}

// -- Fake client --------------------------------------------------------------

/// In-memory `ApiClient` whose like calls resolve only when the test says so.
#[derive(Default)]
pub struct FakeClient {
    articles: Mutex<Vec<Article>>,
    summaries: Mutex<Option<Vec<ArticleSummary>>>,
    gates: Mutex<HashMap<ArticleId, oneshot::Receiver<()>>>,
    likes: Mutex<VecDeque<oneshot::Receiver<LikeReply>>>,
    article_fetches: AtomicUsize,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(ids: &[ArticleId]) -> Self {
        let client = Self::new();
        *client.articles.lock() = ids.iter().map(|id| article(*id)).collect();
        client
    }

    pub fn set_summaries(&self, summaries: Vec<ArticleSummary>) {
        *self.summaries.lock() = Some(summaries);
    }

    /// Hold the next fetch of `article_id` until the returned sender fires.
    pub fn gate_article(&self, article_id: ArticleId) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().insert(article_id, rx);
        tx
    }

    /// Queue a like call; it resolves with whatever is sent on the returned sender.
    pub fn pending_like(&self) -> oneshot::Sender<LikeReply> {
        let (tx, rx) = oneshot::channel();
        self.likes.lock().push_back(rx);
        tx
    }

    pub fn article_fetches(&self) -> usize {
        self.article_fetches.load(Ordering::SeqCst)
    }
}

impl ApiClient for FakeClient {
    async fn fetch_article(&self, id: ArticleId) -> Result<Article, ApiError> {
        self.article_fetches.fetch_add(1, Ordering::SeqCst);
        let gate = self.gates.lock().remove(&id);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let found = self.articles.lock().iter().find(|a| a.id == id).cloned();
        found.ok_or_else(|| server_error(404))
    }

    async fn fetch_articles(&self) -> Result<Vec<ArticleSummary>, ApiError> {
        let summaries = self.summaries.lock().clone();
        summaries.ok_or_else(|| server_error(500))
    }

    async fn increment_good(&self, _id: ArticleId) -> Result<GoodResponse, ApiError> {
        let pending = self.likes.lock().pop_front();
        match pending {
            Some(reply) => reply.await.unwrap_or_else(|_| Err(server_error(599))),
            None => Err(server_error(503)),
        }
    }
}
