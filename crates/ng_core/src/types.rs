use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publisher of an article as reported by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: Option<String>,
    pub name: String,
}

/// One news story. `url` doubles as the rendering key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: Source,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    /// Kept as sent; upstream promises RFC 3339 but is not trusted to deliver it.
    pub published_at: String,
    pub content: Option<String>,
}

impl Article {
    pub fn published(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.published_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Top-level body of a successful `top-headlines` reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub status: String,
    pub total_results: u32,
    pub articles: Vec<Article>,
}

impl NewsResponse {
    pub fn into_articles(self) -> Vec<Article> {
        self.articles
    }
}

/// Body returned alongside a non-2xx status.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamErrorBody {
    pub status: String,
    pub code: String,
    pub message: String,
}
