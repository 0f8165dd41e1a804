use async_trait::async_trait;

use crate::{Category, NewsResponse, Result};

/// Filters for one `top-headlines` request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlinesQuery {
    pub country: Option<String>,
    pub category: Option<Category>,
}

impl HeadlinesQuery {
    pub fn country(country: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
            category: None,
        }
    }

    pub fn category(category: Category) -> Self {
        Self {
            country: None,
            category: Some(category),
        }
    }
}

#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Fetch the current top headlines matching `query`, in upstream order.
    async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<NewsResponse>;
}
