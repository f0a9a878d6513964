use crate::model::{Article, Sentiment, SentimentAnalysis};

// Keyword hits are presence tests per article: a keyword repeated five times
// in one article still moves the score by one.
const POSITIVE_KEYWORDS: [&str; 7] = ["rise", "gain", "bullish", "up", "positive", "strength", "buy"];
const NEGATIVE_KEYWORDS: [&str; 7] = ["fall", "loss", "bearish", "down", "negative", "weak", "sell"];

const MAX_KEY_POINTS: usize = 3;

/// Scores a news article set against one instrument.
///
/// The instrument is two currency codes joined by '_'; an article is relevant
/// when either code appears in its title or description, case-insensitively.
pub fn analyze(articles: &[Article], instrument: &str) -> SentimentAnalysis {
    if articles.is_empty() {
        return SentimentAnalysis {
            sentiment: Sentiment::Neutral,
            relevance: 0.0,
            key_points: Vec::new(),
            total_relevant: 0,
        };
    }

    let lowered = instrument.to_lowercase();
    let codes: Vec<&str> = lowered.split('_').collect();

    let relevant: Vec<&Article> = articles
        .iter()
        .filter(|article| {
            let title = article.title.to_lowercase();
            let description = article.description.to_lowercase();
            codes
                .iter()
                .any(|code| title.contains(code) || description.contains(code))
        })
        .collect();

    let mut score: i32 = 0;
    for article in &relevant {
        let text = format!("{} {}", article.title, article.description).to_lowercase();
        for keyword in POSITIVE_KEYWORDS {
            if text.contains(keyword) {
                score += 1;
            }
        }
        for keyword in NEGATIVE_KEYWORDS {
            if text.contains(keyword) {
                score -= 1;
            }
        }
    }

    let sentiment = if score > 0 {
        Sentiment::Positive
    } else if score < 0 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    SentimentAnalysis {
        sentiment,
        relevance: relevant.len() as f64 / articles.len() as f64 * 100.0,
        key_points: relevant
            .iter()
            .take(MAX_KEY_POINTS)
            .map(|article| article.title.clone())
            .collect(),
        total_relevant: relevant.len(),
    }
}
