use crate::model::{
    Recommendation, RiskLevel, Sentiment, SentimentAnalysis, TechnicalAnalysis, TradeAction, Trend,
};

const BASE_CONFIDENCE: f64 = 50.0;

/// Fuses a technical and a sentiment analysis into one recommendation.
///
/// Aligned signals raise confidence, lone signals lower it, and anything
/// contradictory (including an unknown trend) falls through to hold. The
/// instrument symbol is part of the call contract for callers that label
/// their output; the rationale text itself does not embed it.
pub fn fuse(
    technical: &TechnicalAnalysis,
    sentiment: &SentimentAnalysis,
    _instrument: &str,
) -> Recommendation {
    let levels = level_text(technical.support, technical.resistance);
    let mut confidence = BASE_CONFIDENCE;

    let (action, mut reasoning) = match (technical.trend, sentiment.sentiment) {
        (Trend::Bullish, Sentiment::Positive) => {
            confidence += 20.0;
            (
                TradeAction::Buy,
                format!("Technical analysis shows bullish trend with positive market sentiment. {levels}"),
            )
        }
        (Trend::Bearish, Sentiment::Negative) => {
            confidence += 20.0;
            (
                TradeAction::Sell,
                format!("Technical analysis shows bearish trend with negative market sentiment. {levels}"),
            )
        }
        (Trend::Bullish, Sentiment::Neutral) => {
            confidence += 10.0;
            (
                TradeAction::Buy,
                format!("Technical analysis shows bullish trend but sentiment is neutral. Consider with caution. {levels}"),
            )
        }
        (Trend::Bearish, Sentiment::Neutral) => {
            confidence += 10.0;
            (
                TradeAction::Sell,
                format!("Technical analysis shows bearish trend but sentiment is neutral. Consider with caution. {levels}"),
            )
        }
        (Trend::Neutral, Sentiment::Positive) => {
            confidence -= 10.0;
            (
                TradeAction::Buy,
                format!("Market sentiment is positive but technical trend is neutral. Wait for stronger technical signals. {levels}"),
            )
        }
        (Trend::Neutral, Sentiment::Negative) => {
            confidence -= 10.0;
            (
                TradeAction::Sell,
                format!("Market sentiment is negative but technical trend is neutral. Wait for stronger technical signals. {levels}"),
            )
        }
        // Contradictory pairs, neutral-on-neutral and unknown trends all land
        // here; hold is the only action left.
        _ => {
            confidence -= 20.0;
            (
                TradeAction::Hold,
                format!("Both technical and sentiment analysis are mixed. No clear signal identified. {levels}"),
            )
        }
    };

    if let Some(rsi) = technical.rsi {
        let against_signal = (action == TradeAction::Buy && rsi < 30.0)
            || (action == TradeAction::Sell && rsi > 70.0);
        // The sell arm tests the same open interval as the buy arm; kept
        // identical for compatibility with the established behavior.
        let healthy_range = (action == TradeAction::Buy && rsi > 30.0 && rsi < 70.0)
            || (action == TradeAction::Sell && rsi > 30.0 && rsi < 70.0);

        if against_signal {
            confidence -= 10.0;
            reasoning.push_str(&format!(
                " RSI at {rsi:.2} suggests potential overbought/oversold condition."
            ));
        } else if healthy_range {
            confidence += 5.0;
            reasoning.push_str(&format!(" RSI at {rsi:.2} confirms healthy momentum."));
        }
    }

    confidence += sentiment.relevance * 0.2;

    let confidence = confidence.clamp(10.0, 100.0).round() as u8;

    Recommendation {
        action,
        confidence,
        risk_level: RiskLevel::from_confidence(confidence),
        reasoning,
    }
}

// A missing level renders as "n/a" instead of aborting rationale
// construction, so a degraded series still yields a well-formed hold.
fn level_text(support: Option<f64>, resistance: Option<f64>) -> String {
    format!(
        "Support at {}, resistance at {}.",
        format_level(support),
        format_level(resistance)
    )
}

fn format_level(level: Option<f64>) -> String {
    match level {
        Some(value) => format!("{value:.5}"),
        None => "n/a".to_string(),
    }
}
