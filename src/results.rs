use crate::error::{InsightError, Result};
use crate::parsers::Table;
use std::fmt;

/// Everything extracted from one fetched page
#[derive(Debug, Clone)]
pub struct PageSummary {
    /// URL the page was fetched from
    pub url: String,

    /// Title of the page (if available)
    pub title: Option<String>,

    /// Extracted text content
    pub text: String,

    /// Image URLs, resolved against `url`
    pub images: Vec<String>,

    /// Tables with more than one row
    pub tables: Vec<Table>,
}

/// Named scalar results of an analysis, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insights {
    entries: Vec<(String, f64)>,
}

impl Insights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`; an existing key keeps its position
    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Insights {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut insights = Insights::new();
        for (key, value) in iter {
            insights.insert(key, value);
        }
        insights
    }
}

impl fmt::Display for Insights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

/// Renders insights as one `key: value` line each, in insertion order
pub fn generate_report(insights: &Insights) -> String {
    let mut report = String::new();
    for (key, value) in insights.iter() {
        report.push_str(&format!("{}: {}\n", key, value));
    }
    report
}

/// Reads a report produced by [`generate_report`] back into insights
///
/// Each non-empty line is split on its first `": "`. Keys holding `": "` or
/// a newline do not survive the round trip.
pub fn parse_report(report: &str) -> Result<Insights> {
    let mut insights = Insights::new();

    for (i, line) in report.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        let malformed = || InsightError::MalformedReport {
            line: i + 1,
            content: line.to_string(),
        };

        let (key, value) = line.split_once(": ").ok_or_else(malformed)?;
        let value = value.parse::<f64>().map_err(|_| malformed())?;
        insights.insert(key, value);
    }

    Ok(insights)
}
