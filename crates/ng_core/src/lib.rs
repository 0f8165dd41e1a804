pub mod category;
pub mod config;
pub mod error;
pub mod source;
pub mod types;

pub use category::Category;
pub use config::Config;
pub use error::{Error, Result};
pub use source::{HeadlineSource, HeadlinesQuery};
pub use types::{Article, NewsResponse, Source};

pub mod prelude {
    pub use crate::{Article, Category, Config, Error, HeadlineSource, HeadlinesQuery, NewsResponse, Result};
}
