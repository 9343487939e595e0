use thiserror::Error;

/// Errors produced while fetching, extracting, analyzing or plotting page data
#[derive(Debug, Error)]
pub enum InsightError {
    /// The HTTP request could not be sent or its body could not be read
    #[error("HTTP error for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The URL is empty or does not parse
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// The page contains no table with more than one row
    #[error("no tables found at {url}")]
    NoTables { url: String },

    /// A column required by an analysis or chart is absent
    #[error("column '{column}' not found (available: {})", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    /// A column holds text where numbers were expected
    #[error("column '{column}' is not numeric (found '{value}')")]
    NonNumericColumn { column: String, value: String },

    /// A column has no values left to aggregate
    #[error("column '{column}' has no values")]
    EmptyColumn { column: String },

    /// Chart rendering failed
    #[error("plot error: {0}")]
    Plot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for `InsightsConfig`
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// A report line has no `key: value` separator or an unparsable value
    #[error("malformed report line {line}: '{content}'")]
    MalformedReport { line: usize, content: String },
}

pub type Result<T> = std::result::Result<T, InsightError>;
