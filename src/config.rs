use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Environment variable that overrides the configured user agent
pub const USER_AGENT_ENV: &str = "INSIGHTS_USER_AGENT";

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Configuration for the insights pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsConfig {
    /// Page whose text is scored for sentiment
    #[serde(default = "default_site_url")]
    pub site_url: String,

    #[serde(default = "default_competitor_url")]
    pub competitor_url: String,

    /// Page whose first table holds `price`/`volume` columns
    #[serde(default = "default_stock_market_url")]
    pub stock_market_url: String,

    #[serde(default = "default_news_url")]
    pub news_url: String,

    /// Page whose first table holds property listings
    #[serde(default = "default_real_estate_url")]
    pub real_estate_url: String,

    #[serde(default)]
    pub fetch: FetchConfig,

    /// Directory the chart SVGs are written to
    #[serde(default = "default_chart_dir")]
    pub chart_dir: String,

    /// Whether charts are drawn at all
    #[serde(default = "default_true")]
    pub draw_charts: bool,

    /// Collapse whitespace in extracted text before scoring it
    #[serde(default = "default_true")]
    pub normalize_text: bool,
}

impl InsightsConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Apply overrides taken from the environment
    pub fn apply_env(&mut self) {
        self.override_user_agent(std::env::var(USER_AGENT_ENV).ok());
    }

    /// Replace the user agent unless the override is absent or empty
    fn override_user_agent(&mut self, user_agent: Option<String>) {
        if let Some(user_agent) = user_agent.filter(|ua| !ua.is_empty()) {
            ::log::debug!("User agent overridden from {}", USER_AGENT_ENV);
            self.fetch.user_agent = user_agent;
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            site_url: default_site_url(),
            competitor_url: default_competitor_url(),
            stock_market_url: default_stock_market_url(),
            news_url: default_news_url(),
            real_estate_url: default_real_estate_url(),
            fetch: FetchConfig::default(),
            chart_dir: default_chart_dir(),
            draw_charts: true,
            normalize_text: true,
        }
    }
}

/// Default request timeout in seconds
fn default_timeout_secs() -> u64 {
    30
}

/// Crate name and version, e.g. `page-insights/0.1.0`
fn default_user_agent() -> String {
    concat!("page-insights/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Page scored for sentiment when none is configured
fn default_site_url() -> String {
    "https://example.com".to_string()
}

/// Placeholder competitor site
fn default_competitor_url() -> String {
    "https://competitor.com".to_string()
}

/// Placeholder stock market site
fn default_stock_market_url() -> String {
    "https://stockmarket.com".to_string()
}

/// Placeholder news site
fn default_news_url() -> String {
    "https://news.com".to_string()
}

/// Placeholder real estate site
fn default_real_estate_url() -> String {
    "https://realestate.com".to_string()
}

/// Charts go under `charts/` in the working directory
fn default_chart_dir() -> String {
    "charts".to_string()
}

/// Default for the on-by-default flags
fn default_true() -> bool {
    true
}
