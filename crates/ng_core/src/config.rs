use std::fmt;
use std::time::Duration;

use url::Url;

use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";
pub const DEFAULT_COUNTRY: &str = "us";
pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(5 * 60);

/// Runtime settings, built once at startup and handed to the client and
/// page controller.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: Url,
    pub country: String,
    pub revalidate: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("country", &self.country)
            .field("revalidate", &self.revalidate)
            .finish()
    }
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Config("news API key is required".to_string()));
        }
        Ok(Self {
            api_key,
            base_url: Url::parse(DEFAULT_BASE_URL)?,
            country: DEFAULT_COUNTRY.to_string(),
            revalidate: DEFAULT_REVALIDATE,
        })
    }

    /// The base path always ends in `/` so API paths are joined under it.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = url;
        Ok(self)
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_revalidate(mut self, revalidate: Duration) -> Self {
        self.revalidate = revalidate;
        self
    }
}
