use clap::Parser;
use page_insights::parsers::TextOptions;
use page_insights::{InsightsConfig, Table, analysis, results, sources, utils, visualize};
use std::path::Path;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let start_time = std::time::Instant::now();
    match run(&config).await {
        Ok(()) => {
            ::log::info!(
                "Finished in {:.2} seconds",
                start_time.elapsed().as_secs_f64()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs every step in order; the first failure ends the run
async fn run(config: &InsightsConfig) -> page_insights::Result<()> {
    let client = page_insights::Fetcher::from_config(&config.fetch).build()?;

    // Scrape a page and score its text
    let options = TextOptions {
        normalize_whitespace: config.normalize_text,
    };
    let page = sources::scrape_page_summary(&client, &config.site_url, &options).await?;
    if let Some(title) = &page.title {
        ::log::info!("Page title: {}", title);
    }
    let sentiment_score = analysis::perform_sentiment_analysis(&page.text);
    println!("Sentiment Score: {}", sentiment_score);

    let competitor_insights = sources::scrape_competitor_website(&config.competitor_url);
    println!("Competitor Insights: {:?}", competitor_insights);

    let stock_market_data =
        sources::scrape_stock_market_website(&client, &config.stock_market_url).await?;
    let stock_market_analysis = analysis::analyze_stock_market_data(&stock_market_data)?;
    println!("Stock Market Analysis: {}", stock_market_analysis);

    let news_articles = sources::scrape_news_articles(&config.news_url);
    println!("News Articles: {:?}", news_articles);

    let real_estate_data =
        sources::scrape_real_estate_website(&client, &config.real_estate_url).await?;
    let real_estate_analysis = analysis::analyze_real_estate_data(&real_estate_data)?;
    println!("Real Estate Analysis: {}", real_estate_analysis);

    if config.draw_charts {
        let chart_dir = Path::new(&config.chart_dir);
        draw_charts(&stock_market_data, chart_dir, &config.stock_market_url)?;
        draw_charts(&real_estate_data, chart_dir, &config.real_estate_url)?;
    }

    let report = results::generate_report(&stock_market_analysis);
    println!("Report:\n{}", report);

    Ok(())
}

fn draw_charts(data: &Table, chart_dir: &Path, url: &str) -> page_insights::Result<()> {
    let prefix = utils::sanitize_filename(url);
    for path in visualize::visualize_data(data, chart_dir, &prefix)? {
        println!("Chart: {}", path.display());
    }
    Ok(())
}
