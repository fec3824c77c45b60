#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Metro record, source row, metric, and score weight types.
//!
//! Every stage of the screener consumes and produces these types. A
//! [`MetroRecord`] is built once from a [`source::PrimaryRow`], enriched by
//! the merge and geography stages, and finally scored.

pub mod metric;
pub mod source;

use metro_screener_geography_models::Coordinates;
use serde::{Deserialize, Serialize};

pub use metric::{Metric, ScoreWeights, WeightsError};

/// Investment profile tag assigned from yield and growth thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketType {
    /// Gross yield at or above the high-yield threshold only.
    #[serde(rename = "High Yield")]
    HighYield,
    /// Population and job growth at or above their thresholds only.
    Growth,
    /// Both the high-yield and growth predicates hold.
    Both,
}

impl MarketType {
    /// Display label, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighYield => "High Yield",
            Self::Growth => "Growth",
            Self::Both => "Both",
        }
    }
}

impl std::fmt::Display for MarketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row per metro area.
///
/// All metric fields are independently nullable; which ones are present
/// depends on which sources matched the metro.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetroRecord {
    /// Stable numeric key from the primary source.
    pub region_id: u64,
    /// Raw display name.
    pub name: String,
    /// Primary two-letter state code (first state for multi-state metros).
    pub state_code: Option<String>,
    /// Lossy join key. Never displayed.
    #[serde(skip)]
    pub normalized_key: String,
    /// Authoritative CBSA code, when known.
    pub cbsa_code: Option<String>,
    /// Provider size rank.
    pub size_rank: Option<u32>,

    /// Most recent typical home value.
    pub median_price: Option<f64>,
    /// Typical home value twelve months earlier.
    pub price_12m_ago: Option<f64>,
    /// Most recent typical monthly rent.
    pub monthly_rent: Option<f64>,
    /// Typical monthly rent twelve months earlier.
    pub rent_12m_ago: Option<f64>,

    /// Annual rent over median price, in percent.
    pub gross_yield: Option<f64>,
    /// Year-over-year rent growth, in percent.
    pub rent_growth_yoy: Option<f64>,
    /// Year-over-year home value growth, in percent.
    pub price_growth_yoy: Option<f64>,

    /// Most recent population estimate.
    pub population: Option<u64>,
    /// Year-over-year population growth, in percent.
    pub pop_growth_yoy: Option<f64>,
    /// Year-over-year private employment growth, in percent.
    pub job_growth_yoy: Option<f64>,
    /// Housing vacancy rate, in percent.
    pub vacancy_rate: Option<f64>,
    /// State landlord-friendliness score (1-10).
    pub landlord_score: Option<f64>,
    /// State violent crime rate per 100k residents.
    pub crime_rate: Option<f64>,

    /// Estimated metro location.
    pub coordinates: Option<Coordinates>,
    /// IATA code of the nearest hub airport.
    pub nearest_airport_code: Option<String>,
    /// Great-circle distance to the nearest hub airport, in miles.
    pub airport_distance_miles: Option<f64>,

    /// Weighted composite score (0-100, one decimal).
    pub composite_score: Option<f64>,
    /// Market classification tag.
    pub market_type: Option<MarketType>,
}

/// Rounds to `places` decimals.
///
/// Exact ties round half away from zero, not to even.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

impl MetroRecord {
    /// Returns the raw input value that drives `metric`, if present.
    #[must_use]
    pub fn metric_input(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::GrossYield => self.gross_yield,
            Metric::PopulationGrowth => self.pop_growth_yoy,
            Metric::JobGrowth => self.job_growth_yoy,
            Metric::RentGrowth => self.rent_growth_yoy,
            Metric::LandlordScore => self.landlord_score,
            Metric::VacancyRate => self.vacancy_rate,
        }
    }
}
