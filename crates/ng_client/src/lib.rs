pub mod newsapi;

pub use newsapi::NewsApiClient;

pub mod prelude {
    pub use super::NewsApiClient;
    pub use ng_core::{HeadlineSource, HeadlinesQuery, NewsResponse, Result, Error};
}
