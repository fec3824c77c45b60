//! Market-type tagging from yield and growth thresholds.

use metro_screener_metro_models::{MarketType, MetroRecord};

/// Minimum gross yield (percent) for a high-yield market.
pub const HIGH_YIELD_THRESHOLD: f64 = 8.0;

/// Minimum population growth (percent) for a growth market.
pub const POP_GROWTH_THRESHOLD: f64 = 1.5;

/// Minimum job growth (percent) for a growth market.
pub const JOB_GROWTH_THRESHOLD: f64 = 1.0;

/// Whether the record clears the high-yield threshold. Missing yield fails.
#[must_use]
pub fn is_high_yield(record: &MetroRecord) -> bool {
    record.gross_yield.unwrap_or(0.0) >= HIGH_YIELD_THRESHOLD
}

/// Whether the record clears both growth thresholds. Missing values fail.
#[must_use]
pub fn is_growth(record: &MetroRecord) -> bool {
    record.pop_growth_yoy.unwrap_or(0.0) >= POP_GROWTH_THRESHOLD
        && record.job_growth_yoy.unwrap_or(0.0) >= JOB_GROWTH_THRESHOLD
}

/// Classifies a record. Independent of its composite score.
#[must_use]
pub fn market_type(record: &MetroRecord) -> Option<MarketType> {
    match (is_high_yield(record), is_growth(record)) {
        (true, true) => Some(MarketType::Both),
        (true, false) => Some(MarketType::HighYield),
        (false, true) => Some(MarketType::Growth),
        (false, false) => None,
    }
}
