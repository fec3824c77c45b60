//! Score ordering and the ranked output row.

use std::cmp::Ordering;

use metro_screener_metro_models::{MarketType, MetroRecord, round_to};
use serde::{Deserialize, Serialize};

/// A metro as it appears in the exported dataset.
///
/// Values are rounded for presentation: prices and rents to whole dollars,
/// percentages to two decimals, crime rate to one. The landlord score is
/// exported as its whole-number part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMetro {
    /// 1-based position in score order.
    pub rank: usize,
    pub region_id: u64,
    pub name: String,
    /// Primary state code.
    pub state: Option<String>,
    pub composite_score: Option<f64>,
    pub market_type: Option<MarketType>,
    pub median_price: Option<i64>,
    pub monthly_rent: Option<i64>,
    pub gross_yield: Option<f64>,
    pub rent_growth_yoy: Option<f64>,
    pub price_growth_yoy: Option<f64>,
    pub pop_growth_yoy: Option<f64>,
    pub job_growth_yoy: Option<f64>,
    pub vacancy_rate: Option<f64>,
    pub landlord_score: Option<u8>,
    /// IATA code of the nearest hub airport.
    pub nearest_airport: Option<String>,
    pub airport_distance_miles: Option<f64>,
    pub population: Option<u64>,
    /// State violent crime rate per 100k residents.
    pub crime_rate: Option<f64>,
}

impl RankedMetro {
    /// Builds the output row for `record` at `rank`.
    #[must_use]
    pub fn from_record(rank: usize, record: MetroRecord) -> Self {
        Self {
            rank,
            region_id: record.region_id,
            name: record.name,
            state: record.state_code,
            composite_score: record.composite_score,
            market_type: record.market_type,
            median_price: record.median_price.map(round_whole),
            monthly_rent: record.monthly_rent.map(round_whole),
            gross_yield: record.gross_yield.map(|v| round_to(v, 2)),
            rent_growth_yoy: record.rent_growth_yoy.map(|v| round_to(v, 2)),
            price_growth_yoy: record.price_growth_yoy.map(|v| round_to(v, 2)),
            pop_growth_yoy: record.pop_growth_yoy.map(|v| round_to(v, 2)),
            job_growth_yoy: record.job_growth_yoy.map(|v| round_to(v, 2)),
            vacancy_rate: record.vacancy_rate.map(|v| round_to(v, 2)),
            landlord_score: record.landlord_score.map(whole_score),
            nearest_airport: record.nearest_airport_code,
            airport_distance_miles: record.airport_distance_miles,
            population: record.population,
            crime_rate: record.crime_rate.map(|v| round_to(v, 1)),
        }
    }
}

/// Orders records by composite score, highest first. Unscored records
/// sort last.
fn by_score_descending(a: &MetroRecord, b: &MetroRecord) -> Ordering {
    match (a.composite_score, b.composite_score) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts records by composite score and assigns 1-based ranks.
///
/// The sort is stable, so equal scores keep their input order and receive
/// consecutive ranks.
#[must_use]
pub fn rank_metros(mut records: Vec<MetroRecord>) -> Vec<RankedMetro> {
    records.sort_by(by_score_descending);
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| RankedMetro::from_record(i + 1, record))
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn round_whole(value: f64) -> i64 {
    value.round() as i64
}

/// Whole-number part of a landlord score. Scores are loaded in `[1, 10]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_score(value: f64) -> u8 {
    value.clamp(0.0, f64::from(u8::MAX)).trunc() as u8
}
