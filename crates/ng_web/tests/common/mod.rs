#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use ng_core::{Article, Config, Error, HeadlineSource, HeadlinesQuery, NewsResponse, Result, Source};
use ng_web::{create_app, AppState, PageController};
use scraper::{Html, Selector};
use tower::ServiceExt;

/// In-memory upstream that records every call.
pub struct FakeSource {
    calls: AtomicUsize,
    queries: Mutex<Vec<HeadlinesQuery>>,
    articles: Mutex<Vec<Article>>,
    failing: AtomicBool,
    delay: Mutex<Duration>,
}

impl FakeSource {
    pub fn new(articles: Vec<Article>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            articles: Mutex::new(articles),
            failing: AtomicBool::new(false),
            delay: Mutex::new(Duration::ZERO),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<HeadlinesQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn set_articles(&self, articles: Vec<Article>) {
        *self.articles.lock().unwrap() = articles;
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Makes every fetch take at least `delay`.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }
}

#[async_trait]
impl HeadlineSource for FakeSource {
    async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<NewsResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());
        let delay = *self.delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::Upstream {
                status: 500,
                code: "unexpectedError".to_string(),
                message: "upstream is down".to_string(),
            });
        }
        let articles = self.articles.lock().unwrap().clone();
        Ok(NewsResponse {
            status: "ok".to_string(),
            total_results: articles.len() as u32,
            articles,
        })
    }
}

pub fn article(title: &str, url: &str) -> Article {
    Article {
        source: Source {
            id: None,
            name: "Wire".to_string(),
        },
        author: None,
        title: title.to_string(),
        description: Some(format!("About {}", title)),
        url: url.to_string(),
        url_to_image: None,
        published_at: "2024-05-01T12:00:00Z".to_string(),
        content: None,
    }
}

pub fn config(revalidate: Duration) -> Config {
    Config::new("KEY").unwrap().with_revalidate(revalidate)
}

pub fn controller(source: Arc<FakeSource>, revalidate: Duration) -> PageController {
    PageController::new(source, config(revalidate))
}

pub fn app(source: Arc<FakeSource>, revalidate: Duration) -> Router {
    create_app(AppState::new(controller(source, revalidate)))
}

pub async fn get(app: &Router, path: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn heading(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = Selector::parse("main h1").unwrap();
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect())
        .unwrap_or_default()
}

pub fn unit_titles(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("main .col .card-title").unwrap();
    document.select(&selector).map(|el| el.text().collect()).collect()
}
