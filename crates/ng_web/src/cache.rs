use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct CachedPage {
    html: String,
    rendered_at: Instant,
}

/// Rendered pages kept for a bounded staleness window.
#[derive(Debug)]
pub struct PageCache<K> {
    entries: RwLock<HashMap<K, CachedPage>>,
}

impl<K: Eq + Hash> Default for PageCache<K> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash> PageCache<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached page if it was rendered less than `window` ago.
    pub async fn get_fresh(&self, key: &K, window: Duration) -> Option<String> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|page| page.rendered_at.elapsed() < window)
            .map(|page| page.html.clone())
    }

    pub async fn insert(&self, key: K, html: String) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            CachedPage {
                html,
                rendered_at: Instant::now(),
            },
        );
    }
}
