use vader_sentiment::SentimentIntensityAnalyzer;

/// VADER polarity scores of a text
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SentimentScores {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    /// Normalized overall polarity in `[-1, 1]`
    pub compound: f64,
}

/// Scores a text with the VADER lexicon
pub fn polarity_scores(text: &str) -> SentimentScores {
    if text.trim().is_empty() {
        return SentimentScores::default();
    }

    let analyzer = SentimentIntensityAnalyzer::new();
    let scores = analyzer.polarity_scores(text);
    let score = |key: &str| scores.get(key).copied().unwrap_or(0.0);

    SentimentScores {
        negative: score("neg"),
        neutral: score("neu"),
        positive: score("pos"),
        compound: score("compound"),
    }
}

/// Compound sentiment score of a text, in `[-1, 1]`
pub fn perform_sentiment_analysis(text: &str) -> f64 {
    let compound = polarity_scores(text).compound;
    ::log::debug!("Sentiment of {} chars: {}", text.len(), compound);
    compound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let score = perform_sentiment_analysis("This product is great, I really love it!");
        assert!(score > 0.5, "score was {}", score);
    }

    #[test]
    fn test_negative_text() {
        let score = perform_sentiment_analysis("The service was terrible and the food was awful.");
        assert!(score < -0.5, "score was {}", score);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(perform_sentiment_analysis(""), 0.0);
        assert_eq!(perform_sentiment_analysis("   \n"), 0.0);
    }

    #[test]
    fn test_scores_are_bounded() {
        let scores = polarity_scores("Good good good GREAT amazing wonderful!!! :)");
        assert!((-1.0..=1.0).contains(&scores.compound));
        assert!(scores.positive > scores.negative);
    }
}
