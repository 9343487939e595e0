use crate::config::FetchConfig;
use crate::error::{InsightError, Result};
use std::time::Duration;
use url::Url;

/// Builder for the HTTP client used to download pages
pub struct Fetcher {
    timeout: Duration,
    user_agent: String,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::from_config(&FetchConfig::default())
    }
}

impl Fetcher {
    /// Create a new fetcher with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fetcher from the configured timeout and user agent
    pub fn from_config(config: &FetchConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_secs),
            user_agent: config.user_agent.clone(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout = Duration::from_secs(timeout_seconds);
        self
    }

    /// Set the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the underlying client
    pub fn build(self) -> Result<Client> {
        let inner = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(|source| InsightError::Http {
                url: "<client setup>".to_string(),
                source,
            })?;

        Ok(Client { inner })
    }
}

/// Configured HTTP client
#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
}

impl Client {
    /// Downloads the page at `url` and returns its body as text
    ///
    /// A non-success status is logged and its body returned anyway; only
    /// transport failures are errors. There is no retry.
    pub async fn extract_data(&self, url: &str) -> Result<String> {
        let parsed = parse_url(url)?;
        ::log::info!("Fetching {}", parsed);

        let response = self
            .inner
            .get(parsed)
            .send()
            .await
            .map_err(|source| InsightError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            ::log::warn!("HTTP {} for {}", status, url);
        }

        let body = response.text().await.map_err(|source| InsightError::Http {
            url: url.to_string(),
            source,
        })?;

        ::log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

/// Fetches a page with a default client
pub async fn fetch(url: &str) -> Result<String> {
    Fetcher::new().build()?.extract_data(url).await
}

/// Validates a URL before a request is made for it
pub fn parse_url(url: &str) -> Result<Url> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(InsightError::InvalidUrl {
            url: url.to_string(),
        });
    }

    Url::parse(trimmed).map_err(|_| InsightError::InvalidUrl {
        url: url.to_string(),
    })
}
