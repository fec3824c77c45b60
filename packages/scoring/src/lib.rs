#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Scores and classifies merged metro records.
//!
//! Each raw metric is mapped onto a 0-100 scale, combined into a composite
//! that is penalized for missing data, and tagged with a market type. The
//! final filter drops records that cannot be ranked.

pub mod classify;
pub mod composite;
pub mod normalize;

use metro_screener_metro_models::{MarketType, MetroRecord, ScoreWeights};

pub use classify::{is_growth, is_high_yield, market_type};
pub use composite::composite_score;
pub use normalize::normalized_score;

/// Scores one record: `(composite_score, market_type)`.
#[must_use]
pub fn score(record: &MetroRecord, weights: &ScoreWeights) -> (Option<f64>, Option<MarketType>) {
    (composite_score(record, weights), market_type(record))
}

/// Returns `record` with its composite score and market type set.
#[must_use]
pub fn apply_score(record: MetroRecord, weights: &ScoreWeights) -> MetroRecord {
    let (composite_score, market_type) = score(&record, weights);
    MetroRecord {
        composite_score,
        market_type,
        ..record
    }
}

/// Scores every record, preserving order.
#[must_use]
pub fn score_all(records: Vec<MetroRecord>, weights: &ScoreWeights) -> Vec<MetroRecord> {
    let scored: Vec<MetroRecord> = records
        .into_iter()
        .map(|record| apply_score(record, weights))
        .collect();

    let unscored = scored.iter().filter(|r| r.composite_score.is_none()).count();
    log::info!(
        "Scored {} of {} metros",
        scored.len() - unscored,
        scored.len()
    );

    scored
}

/// Whether a record has everything the ranked output requires.
#[must_use]
pub const fn is_rankable(record: &MetroRecord) -> bool {
    record.median_price.is_some()
        && record.monthly_rent.is_some()
        && record.composite_score.is_some()
}

/// Drops records lacking a median price, monthly rent, or composite score.
///
/// Returns the retained records in input order.
#[must_use]
pub fn retain_rankable(records: Vec<MetroRecord>) -> Vec<MetroRecord> {
    let total = records.len();
    let retained: Vec<MetroRecord> = records.into_iter().filter(is_rankable).collect();

    if retained.len() < total {
        log::info!(
            "Excluded {} of {} metros missing price, rent, or score",
            total - retained.len(),
            total
        );
    }

    retained
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(name: &str) -> MetroRecord {
        MetroRecord {
            name: name.to_string(),
            median_price: Some(200_000.0),
            monthly_rent: Some(1500.0),
            gross_yield: Some(9.0),
            pop_growth_yoy: Some(2.0),
            job_growth_yoy: Some(1.2),
            ..MetroRecord::default()
        }
    }

    #[test]
    fn apply_score_sets_both_outputs() {
        let scored = apply_score(complete("Tulsa, OK"), &ScoreWeights::default());
        assert!(scored.composite_score.is_some());
        assert_eq!(scored.market_type, Some(MarketType::Both));
    }

    #[test]
    fn missing_rent_is_excluded_regardless_of_score() {
        let no_rent = MetroRecord {
            monthly_rent: None,
            ..complete("No Rent, TX")
        };
        let scored = score_all(vec![no_rent, complete("Tulsa, OK")], &ScoreWeights::default());
        assert!(scored[0].composite_score.is_some());

        let retained = retain_rankable(scored);
        assert_eq!(retained.len(), 1);
        assert_eq!(retained[0].name, "Tulsa, OK");
    }

    #[test]
    fn unscored_records_are_excluded() {
        let bare = MetroRecord {
            median_price: Some(100_000.0),
            monthly_rent: Some(900.0),
            ..MetroRecord::default()
        };
        let scored = score_all(vec![bare], &ScoreWeights::default());
        assert!(retain_rankable(scored).is_empty());
    }

    #[test]
    fn retained_scores_are_bounded() {
        let extreme = MetroRecord {
            gross_yield: Some(-4.0),
            vacancy_rate: Some(60.0),
            rent_growth_yoy: Some(-30.0),
            ..complete("Extreme, ZZ")
        };
        let scored = score_all(vec![extreme, complete("Tulsa, OK")], &ScoreWeights::default());
        for record in retain_rankable(scored) {
            let score = record.composite_score.unwrap();
            assert!((0.0..=100.0).contains(&score), "{score}");
        }
    }
}
