use clap::Parser;
use page_insights::InsightsConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-insights")]
#[command(about = "Fetches pages and prints sentiment, table statistics and reports")]
#[command(version)]
pub struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Page whose text is scored for sentiment
    #[arg(long)]
    pub site_url: Option<String>,

    #[arg(long)]
    pub competitor_url: Option<String>,

    /// Page whose first table holds price and volume columns
    #[arg(long)]
    pub stock_url: Option<String>,

    #[arg(long)]
    pub news_url: Option<String>,

    /// Page whose first table holds property listings
    #[arg(long)]
    pub real_estate_url: Option<String>,

    /// Directory chart SVGs are written to
    #[arg(long)]
    pub chart_dir: Option<String>,

    /// Skip drawing charts
    #[arg(long)]
    pub no_charts: bool,

    /// Request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,
}

impl Args {
    /// Builds the configuration: defaults, then the config file, then flags
    pub fn into_config(self) -> page_insights::Result<InsightsConfig> {
        let mut config = match &self.config {
            Some(path) => InsightsConfig::from_file(path)?,
            None => InsightsConfig::default(),
        };

        if let Some(url) = self.site_url {
            config.site_url = url;
        }
        if let Some(url) = self.competitor_url {
            config.competitor_url = url;
        }
        if let Some(url) = self.stock_url {
            config.stock_market_url = url;
        }
        if let Some(url) = self.news_url {
            config.news_url = url;
        }
        if let Some(url) = self.real_estate_url {
            config.real_estate_url = url;
        }
        if let Some(dir) = self.chart_dir {
            config.chart_dir = dir;
        }
        if self.no_charts {
            config.draw_charts = false;
        }
        if let Some(secs) = self.timeout {
            config.fetch.timeout_secs = secs;
        }

        config.apply_env();
        Ok(config)
    }
}
