pub mod analysis;
pub mod config;
pub mod error;
pub mod fetch;
pub mod parsers;
pub mod results;
pub mod sources;
pub mod utils;
pub mod visualize;

// Re-export commonly used types for convenience
pub use analysis::{
    analyze_real_estate_data, analyze_stock_market_data, perform_data_analysis,
    perform_sentiment_analysis,
};
pub use config::InsightsConfig;
pub use error::{InsightError, Result};
pub use fetch::{Client, Fetcher, fetch};
pub use parsers::html::{extract_images, extract_text};
pub use parsers::table::{clean_table, extract_tables};
pub use parsers::{Cell, Document, Table, parse};
pub use results::{Insights, PageSummary, generate_report, parse_report};
pub use utils::clean_data;
pub use visualize::visualize_data;
