//! Site-specific scrapers built on the fetch and parser modules.
//!
//! Competitor and news scraping are placeholders that return fixed insights
//! without touching the network.

use crate::error::{InsightError, Result};
use crate::fetch::Client;
use crate::parsers::html::{TextOptions, resolve_image_urls};
use crate::parsers::table::clean_table;
use crate::parsers::{self, Table};
use crate::results::PageSummary;
use crate::utils::clean_data;

/// Fetches a page once and extracts its title, text, images and tables
///
/// Newlines are stripped from the markup before the text is read.
pub async fn scrape_page_summary(
    client: &Client,
    url: &str,
    options: &TextOptions,
) -> Result<PageSummary> {
    let html = client.extract_data(url).await?;
    let doc = parsers::parse(&clean_data(&html));

    let summary = PageSummary {
        url: url.to_string(),
        title: doc.title(),
        text: doc.text(options),
        images: resolve_image_urls(url, &doc.images()),
        tables: doc.tables(),
    };

    ::log::info!(
        "Scraped {}: {} chars of text, {} images, {} tables",
        url,
        summary.text.len(),
        summary.images.len(),
        summary.tables.len()
    );
    Ok(summary)
}

/// Insights about a competitor's site
pub fn scrape_competitor_website(url: &str) -> Vec<String> {
    ::log::debug!("Competitor insights for {} are fixed", url);
    vec![
        "Competitor website is using a new pricing strategy.".to_string(),
        "Competitor launched a new product.".to_string(),
    ]
}

/// Headlines from a news site
pub fn scrape_news_articles(url: &str) -> Vec<String> {
    ::log::debug!("News articles for {} are fixed", url);
    vec![
        "New trend identified in the tech industry.".to_string(),
        "Public sentiment regarding a recent event.".to_string(),
    ]
}

/// First table of a stock market page, without rows that miss values
pub async fn scrape_stock_market_website(client: &Client, url: &str) -> Result<Table> {
    scrape_first_table(client, url).await
}

/// First table of a real estate listing page, without rows that miss values
pub async fn scrape_real_estate_website(client: &Client, url: &str) -> Result<Table> {
    scrape_first_table(client, url).await
}

async fn scrape_first_table(client: &Client, url: &str) -> Result<Table> {
    let html = client.extract_data(url).await?;
    let table = first_clean_table(&html).ok_or_else(|| InsightError::NoTables {
        url: url.to_string(),
    })?;

    ::log::info!(
        "Table from {} has {} columns and {} complete rows",
        url,
        table.columns.len(),
        table.len()
    );
    Ok(table)
}

fn first_clean_table(html: &str) -> Option<Table> {
    parsers::table::extract_tables(html)
        .first()
        .map(clean_table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::Fetcher;
    use crate::fetch::tests::serve;

    const LISTINGS: &str = r#"<html><head><title>Listings</title></head><body>
<img src="/photos/1.jpg">
<table>
<thead><tr><th>address</th><th>price</th><th>latitude</th><th>longitude</th></tr></thead>
<tr><td>1 Main St</td><td>350,000</td><td>30.27</td><td>-97.74</td></tr>
<tr><td>2 Oak Ave</td><td>N/A</td><td>30.28</td><td>-97.75</td></tr>
<tr><td>3 Elm Rd</td><td>450,000</td><td>30.29</td><td>-97.73</td></tr>
</table>
</body></html>"#;

    #[test]
    fn test_stubbed_scrapers() {
        assert_eq!(
            scrape_competitor_website("https://competitor.com"),
            vec![
                "Competitor website is using a new pricing strategy.",
                "Competitor launched a new product.",
            ]
        );
        assert_eq!(scrape_news_articles("https://news.com").len(), 2);
    }

    #[test]
    fn test_first_clean_table() {
        let table = first_clean_table(LISTINGS).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.numeric_column("price").unwrap(), vec![350_000.0, 450_000.0]);

        assert!(first_clean_table("<p>no tables</p>").is_none());
    }

    #[tokio::test]
    async fn test_scrape_real_estate_website() {
        let url = serve("HTTP/1.1 200 OK", LISTINGS).await;
        let client = Fetcher::new().build().unwrap();

        let table = scrape_real_estate_website(&client, &url).await.unwrap();
        assert_eq!(table.columns, vec!["address", "price", "latitude", "longitude"]);
        assert_eq!(table.len(), 2);
    }

    #[tokio::test]
    async fn test_scrape_stock_market_website_without_tables() {
        let url = serve("HTTP/1.1 200 OK", "<html><body><p>closed</p></body></html>").await;
        let client = Fetcher::new().build().unwrap();

        let err = scrape_stock_market_website(&client, &url).await.unwrap_err();
        assert!(matches!(err, InsightError::NoTables { .. }));
    }

    #[tokio::test]
    async fn test_scrape_page_summary() {
        let url = serve("HTTP/1.1 200 OK", LISTINGS).await;
        let client = Fetcher::new().build().unwrap();
        let options = TextOptions {
            normalize_whitespace: true,
        };

        let summary = scrape_page_summary(&client, &url, &options).await.unwrap();
        assert_eq!(summary.title.as_deref(), Some("Listings"));
        assert_eq!(summary.images, vec![format!("{}/photos/1.jpg", url)]);
        assert_eq!(summary.tables.len(), 1);
        assert!(summary.text.contains("1 Main St"));
    }
}
