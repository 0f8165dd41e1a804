use std::fmt;

use async_trait::async_trait;
use ng_core::types::UpstreamErrorBody;
use ng_core::{Config, Error, HeadlineSource, HeadlinesQuery, NewsResponse, Result};
use tracing::{debug, info};
use url::Url;

const TOP_HEADLINES_PATH: &str = "v2/top-headlines";
const USER_AGENT: &str = concat!("ng/", env!("CARGO_PKG_VERSION"));

/// `HeadlineSource` backed by the newsapi.org REST API.
#[derive(Clone)]
pub struct NewsApiClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl NewsApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Full request URL for `query`, API key included.
    pub fn request_url(&self, query: &HeadlinesQuery) -> Result<Url> {
        let mut url = self.base_url.join(TOP_HEADLINES_PATH)?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(country) = &query.country {
                pairs.append_pair("country", country);
            }
            if let Some(category) = &query.category {
                pairs.append_pair("category", category.as_str());
            }
            pairs.append_pair("apiKey", &self.api_key);
        }
        Ok(url)
    }
}

fn upstream_error(status: u16, body: &str) -> Error {
    match serde_json::from_str::<UpstreamErrorBody>(body) {
        Ok(err) => Error::Upstream {
            status,
            code: err.code,
            message: err.message,
        },
        Err(_) => Error::Upstream {
            status,
            code: "unexpectedResponse".to_string(),
            message: body.chars().take(200).collect(),
        },
    }
}

#[async_trait]
impl HeadlineSource for NewsApiClient {
    async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<NewsResponse> {
        let url = self.request_url(query)?;
        info!(
            country = query.country.as_deref().unwrap_or("-"),
            category = query.category.map(|c| c.as_str()).unwrap_or("-"),
            "📰 Fetching top headlines"
        );

        // reqwest errors carry the request URL, which includes the key.
        let response = self.http.get(url).send().await.map_err(|e| e.without_url())?;
        let status = response.status();
        let body = response.text().await.map_err(|e| e.without_url())?;
        if !status.is_success() {
            return Err(upstream_error(status.as_u16(), &body));
        }

        // newsapi can report failures inside a 200 body.
        let value: serde_json::Value = serde_json::from_str(&body)?;
        if value.get("status").and_then(|s| s.as_str()) == Some("error") {
            return Err(upstream_error(status.as_u16(), &body));
        }
        let news: NewsResponse = serde_json::from_value(value)?;
        debug!(total = news.total_results, received = news.articles.len(), "Decoded headlines");
        Ok(news)
    }
}
