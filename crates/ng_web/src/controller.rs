use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use ng_core::{Category, Config, HeadlineSource, HeadlinesQuery, Result};
use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::PageCache;
use crate::render::{self, GridColumns};

/// How long a rendered page may be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Fetch on every render.
    AlwaysFresh,
    /// Reuse the last render until it is older than the window.
    Revalidate(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Breaking,
    Category(Category),
}

impl Page {
    /// Breaking news followed by every category page.
    pub fn all() -> Vec<Page> {
        std::iter::once(Page::Breaking)
            .chain(Category::ALL.into_iter().map(Page::Category))
            .collect()
    }

    /// Resolves a route path. Unknown categories resolve to `None`.
    pub fn from_path(path: &str) -> Option<Page> {
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return Some(Page::Breaking);
        }
        path.strip_prefix("/categories/")
            .and_then(|id| id.parse().ok())
            .map(Page::Category)
    }

    pub fn path(&self) -> String {
        match self {
            Page::Breaking => "/".to_string(),
            Page::Category(category) => category.path(),
        }
    }

    /// Location of this page inside a static export.
    pub fn output_path(&self) -> PathBuf {
        match self {
            Page::Breaking => PathBuf::from("index.html"),
            Page::Category(category) => PathBuf::from("categories")
                .join(category.as_str())
                .join("index.html"),
        }
    }

    pub fn query(&self, config: &Config) -> HeadlinesQuery {
        match self {
            Page::Breaking => HeadlinesQuery::country(config.country.clone()),
            Page::Category(category) => HeadlinesQuery::category(*category),
        }
    }

    pub fn heading(&self) -> String {
        match self {
            Page::Breaking => "Breaking News".to_string(),
            Page::Category(category) => format!("Category: {}", category),
        }
    }

    /// Policy a page is served with when nothing overrides it.
    pub fn freshness(&self, config: &Config) -> Freshness {
        match self {
            Page::Breaking => Freshness::AlwaysFresh,
            Page::Category(_) => Freshness::Revalidate(config.revalidate),
        }
    }
}

fn describe_window(window: Duration) -> String {
    let secs = window.as_secs();
    match secs {
        60 => "1 minute".to_string(),
        s if s >= 60 && s % 60 == 0 => format!("{} minutes", s / 60),
        1 => "1 second".to_string(),
        s => format!("{} seconds", s),
    }
}

fn notice(freshness: Freshness) -> String {
    match freshness {
        Freshness::AlwaysFresh => {
            "This page fetches headlines on every request, so it always shows the latest news.".to_string()
        }
        Freshness::Revalidate(window) => format!(
            "This page is served from a cache and shows headlines not older than {}.",
            describe_window(window)
        ),
    }
}

/// Fetches headlines for a page and renders them, reusing earlier renders
/// when the freshness policy allows it.
pub struct PageController {
    source: Arc<dyn HeadlineSource>,
    config: Config,
    columns: GridColumns,
    cache: PageCache<Page>,
    refreshing: Mutex<HashMap<Page, Arc<Mutex<()>>>>,
}

impl PageController {
    pub fn new(source: Arc<dyn HeadlineSource>, config: Config) -> Self {
        Self {
            source,
            config,
            columns: GridColumns::default(),
            cache: PageCache::new(),
            refreshing: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_columns(mut self, columns: GridColumns) -> Self {
        self.columns = columns;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Renders `page` with its default freshness policy.
    pub async fn render_page(&self, page: &Page) -> Result<String> {
        self.render(page, page.freshness(&self.config)).await
    }

    /// Single fetch-and-render pass. `freshness` only decides whether a
    /// cached render may be reused; the page text always describes the
    /// page's own policy. Failures are returned as-is and never cached.
    pub async fn render(&self, page: &Page, freshness: Freshness) -> Result<String> {
        let Freshness::Revalidate(window) = freshness else {
            return self.fetch_and_render(page).await;
        };

        if let Some(html) = self.cache.get_fresh(page, window).await {
            debug!(path = %page.path(), "Serving cached page");
            return Ok(html);
        }

        // One refresh per page at a time; waiters pick up its result.
        let lock = self.refresh_lock(page).await;
        let _guard = lock.lock().await;
        if let Some(html) = self.cache.get_fresh(page, window).await {
            debug!(path = %page.path(), "Serving page refreshed by another request");
            return Ok(html);
        }

        let html = self.fetch_and_render(page).await?;
        self.cache.insert(*page, html.clone()).await;
        Ok(html)
    }

    async fn refresh_lock(&self, page: &Page) -> Arc<Mutex<()>> {
        let mut locks = self.refreshing.lock().await;
        locks.entry(*page).or_default().clone()
    }

    async fn fetch_and_render(&self, page: &Page) -> Result<String> {
        let news = self.source.top_headlines(&page.query(&self.config)).await?;
        let articles = news.into_articles();
        let notice = notice(page.freshness(&self.config));
        Ok(render::news_page(&page.heading(), &notice, &articles, self.columns))
    }
}
