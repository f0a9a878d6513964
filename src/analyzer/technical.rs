use crate::broker::objects::Candle;
use crate::model::{TechnicalAnalysis, Trend};

/// Number of most recent closes considered for trend classification.
const TREND_WINDOW: usize = 10;
/// Number of per-step changes averaged for the RSI.
const RSI_PERIOD: usize = 14;

/// Classifies trend, support/resistance and RSI for one candle series.
///
/// Candles without a mid block or with a close that does not parse are
/// dropped up front; everything downstream sees clean prices. Fewer than two
/// valid closes means no classification at all.
pub fn analyze(candles: &[Candle]) -> TechnicalAnalysis {
    let prices: Vec<f64> = candles.iter().filter_map(Candle::close).collect();

    if prices.len() < 2 {
        return TechnicalAnalysis {
            trend: Trend::Unknown,
            support: None,
            resistance: None,
            rsi: None,
            price_levels: prices,
        };
    }

    let recent = &prices[prices.len().saturating_sub(TREND_WINDOW)..];
    let oldest = recent[0];
    let newest = recent[recent.len() - 1];

    let trend = if newest > oldest * 1.005 {
        Trend::Bullish
    } else if newest < oldest * 0.995 {
        Trend::Bearish
    } else {
        Trend::Neutral
    };

    let support = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let resistance = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let rsi = compute_rsi(&prices);

    TechnicalAnalysis {
        trend,
        support: Some(support),
        resistance: Some(resistance),
        rsi,
        price_levels: prices,
    }
}

/// Simplified RSI: per-step gains and losses over the whole series, then the
/// sum of the last up-to-14 of each divided by a fixed 14. With 14 prices
/// there are only 13 steps; the divisor stays 14. A zero average loss leaves
/// the RSI undefined rather than saturating at 100.
fn compute_rsi(prices: &[f64]) -> Option<f64> {
    if prices.len() < RSI_PERIOD {
        return None;
    }

    let mut gains = Vec::new();
    let mut losses = Vec::new();
    for w in prices.windows(2) {
        let change = w[1] - w[0];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    let tail = gains.len().saturating_sub(RSI_PERIOD);
    let avg_gain = gains[tail..].iter().sum::<f64>() / RSI_PERIOD as f64;
    let avg_loss = losses[tail..].iter().sum::<f64>() / RSI_PERIOD as f64;

    if avg_loss == 0.0 {
        return None;
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}
