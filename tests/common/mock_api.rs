//! Mock blog server for testing the HTTP client.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use blogreader::api::{Article, ArticleId, ArticleSummary, GoodResponse};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Clone)]
struct MockState {
    articles: Arc<Mutex<BTreeMap<ArticleId, (Article, u64)>>>,
    fail_likes: Arc<AtomicBool>,
    corrupt_articles: Arc<AtomicBool>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Blog API backed by an in-memory article table, served under `/api`.
pub struct MockBlog {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockBlog {
    /// Start a server holding `articles` with their initial good counts.
    pub async fn start(articles: Vec<(Article, u64)>) -> Self {
        let state = MockState {
            articles: Arc::new(Mutex::new(
                articles.into_iter().map(|(a, good)| (a.id, (a, good))).collect(),
            )),
            fail_likes: Arc::new(AtomicBool::new(false)),
            corrupt_articles: Arc::new(AtomicBool::new(false)),
            requests: Arc::new(Mutex::new(Vec::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/api/articles", get(list_articles))
            .route("/api/articles/{id}", get(get_article))
            .route("/api/articles/{id}/good", post(increment_good))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Make every like request answer 503.
    pub fn fail_likes(&self, fail: bool) {
        self.state.fail_likes.store(fail, Ordering::SeqCst);
    }

    /// Make article requests answer 200 with a non-JSON body.
    pub fn corrupt_articles(&self, corrupt: bool) {
        self.state.corrupt_articles.store(corrupt, Ordering::SeqCst);
    }

    /// Simulate a like from another client.
    pub async fn bump_good(&self, id: ArticleId) {
        if let Some((_, good)) = self.state.articles.lock().await.get_mut(&id) {
            *good += 1;
        }
    }

    pub async fn good(&self, id: ArticleId) -> Option<u64> {
        self.state.articles.lock().await.get(&id).map(|(_, good)| *good)
    }

    /// "METHOD path" of every request served so far.
    pub async fn requests(&self) -> Vec<String> {
        self.state.requests.lock().await.clone()
    }
}

impl Drop for MockBlog {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn record(state: &MockState, line: String) {
    state.requests.lock().await.push(line);
}

async fn list_articles(State(state): State<MockState>) -> Json<Vec<ArticleSummary>> {
    record(&state, "GET /api/articles".to_string()).await;
    let articles = state.articles.lock().await;
    Json(
        articles
            .values()
            .map(|(a, good)| ArticleSummary {
                id: a.id,
                title: a.title.clone(),
                date: a.date,
                good: *good,
            })
            .collect(),
    )
}

async fn get_article(State(state): State<MockState>, Path(id): Path<ArticleId>) -> Response {
    record(&state, format!("GET /api/articles/{}", id)).await;
    if state.corrupt_articles.load(Ordering::SeqCst) {
        return "not json".into_response();
    }
    match state.articles.lock().await.get(&id) {
        Some((article, _)) => Json(article.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn increment_good(State(state): State<MockState>, Path(id): Path<ArticleId>) -> Response {
    record(&state, format!("POST /api/articles/{}/good", id)).await;
    if state.fail_likes.load(Ordering::SeqCst) {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    match state.articles.lock().await.get_mut(&id) {
        Some((_, good)) => {
            *good += 1;
            Json(GoodResponse { good: *good }).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
