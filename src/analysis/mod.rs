pub mod sentiment;
pub mod stats;

pub use sentiment::{SentimentScores, perform_sentiment_analysis, polarity_scores};

use crate::error::{InsightError, Result};
use crate::parsers::Table;
use crate::results::Insights;

/// Mean, median and sample standard deviation of every numeric column
///
/// Keys are `{column}.mean`, `{column}.median` and `{column}.std`, in column
/// order. Columns holding any text, or no values at all, are skipped.
pub fn perform_data_analysis(data: &Table) -> Insights {
    let mut results = Insights::new();

    for (index, column) in data.columns.iter().enumerate() {
        let values = match data.numeric_values(index) {
            Ok(values) if !values.is_empty() => values,
            Ok(_) => {
                ::log::debug!("Skipping empty column '{}'", column);
                continue;
            }
            Err(e) => {
                ::log::debug!("Skipping column: {}", e);
                continue;
            }
        };

        results.insert(format!("{}.mean", column), stats::mean(&values));
        results.insert(format!("{}.median", column), stats::median(&values));
        results.insert(format!("{}.std", column), stats::std_dev(&values));
    }

    results
}

/// Average price and peak volume of a stock table
pub fn analyze_stock_market_data(data: &Table) -> Result<Insights> {
    let prices = required_values(data, "price")?;
    let volumes = required_values(data, "volume")?;

    let mut insights = Insights::new();
    insights.insert("average_price", stats::mean(&prices));
    insights.insert("max_volume", stats::max(&volumes));
    Ok(insights)
}

/// Average and highest price of a property listing table
pub fn analyze_real_estate_data(data: &Table) -> Result<Insights> {
    let prices = required_values(data, "price")?;

    let mut insights = Insights::new();
    insights.insert("avg_price", stats::mean(&prices));
    insights.insert("max_price", stats::max(&prices));
    Ok(insights)
}

/// Values of a numeric column that must exist and hold at least one value
fn required_values(data: &Table, column: &str) -> Result<Vec<f64>> {
    let values = data.numeric_column(column)?;
    if values.is_empty() {
        return Err(InsightError::EmptyColumn {
            column: column.to_string(),
        });
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::Cell;

    fn stock_table() -> Table {
        Table::new(
            vec!["date".into(), "price".into(), "volume".into()],
            vec![
                vec![Cell::Text("2024-01-02".into()), Cell::Number(100.0), Cell::Number(1200.0)],
                vec![Cell::Text("2024-01-03".into()), Cell::Number(104.0), Cell::Number(900.0)],
                vec![Cell::Text("2024-01-04".into()), Cell::Number(102.0), Cell::Number(1500.0)],
            ],
        )
    }

    #[test]
    fn test_perform_data_analysis() {
        let results = perform_data_analysis(&stock_table());

        assert_eq!(
            results.keys().collect::<Vec<_>>(),
            vec![
                "price.mean",
                "price.median",
                "price.std",
                "volume.mean",
                "volume.median",
                "volume.std",
            ]
        );
        assert_eq!(results.get("price.mean"), Some(102.0));
        assert_eq!(results.get("price.median"), Some(102.0));
        assert_eq!(results.get("price.std"), Some(2.0));
        assert_eq!(results.get("volume.median"), Some(1200.0));
    }

    #[test]
    fn test_perform_data_analysis_skips_missing_cells() {
        let table = Table::new(
            vec!["x".into()],
            vec![vec![Cell::Number(1.0)], vec![Cell::Missing], vec![Cell::Number(3.0)]],
        );
        let results = perform_data_analysis(&table);
        assert_eq!(results.get("x.mean"), Some(2.0));
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_perform_data_analysis_no_numeric_columns() {
        let table = Table::new(
            vec!["name".into(), "empty".into()],
            vec![vec![Cell::Text("a".into()), Cell::Missing]],
        );
        assert!(perform_data_analysis(&table).is_empty());
    }

    #[test]
    fn test_analyze_stock_market_data() {
        let insights = analyze_stock_market_data(&stock_table()).unwrap();
        assert_eq!(insights.get("average_price"), Some(102.0));
        assert_eq!(insights.get("max_volume"), Some(1500.0));
        assert_eq!(
            insights.keys().collect::<Vec<_>>(),
            vec!["average_price", "max_volume"]
        );
    }

    #[test]
    fn test_analyze_stock_market_data_missing_column() {
        let table = Table::new(
            vec!["date".into(), "price".into()],
            vec![vec![Cell::Text("2024-01-02".into()), Cell::Number(1.0)]],
        );
        match analyze_stock_market_data(&table).unwrap_err() {
            InsightError::MissingColumn { column, .. } => assert_eq!(column, "volume"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_analyze_real_estate_data() {
        let table = Table::new(
            vec!["address".into(), "Price".into()],
            vec![
                vec![Cell::Text("1 Main St".into()), Cell::Number(350_000.0)],
                vec![Cell::Text("2 Oak Ave".into()), Cell::Number(450_000.0)],
            ],
        );
        let insights = analyze_real_estate_data(&table).unwrap();
        assert_eq!(insights.get("avg_price"), Some(400_000.0));
        assert_eq!(insights.get("max_price"), Some(450_000.0));
    }

    #[test]
    fn test_analyze_real_estate_data_errors() {
        let text_prices = Table::new(
            vec!["price".into()],
            vec![vec![Cell::Text("call for price".into())]],
        );
        assert!(matches!(
            analyze_real_estate_data(&text_prices).unwrap_err(),
            InsightError::NonNumericColumn { .. }
        ));

        let no_prices = Table::new(vec!["price".into()], vec![vec![Cell::Missing]]);
        assert!(matches!(
            analyze_real_estate_data(&no_prices).unwrap_err(),
            InsightError::EmptyColumn { .. }
        ));
    }
}
