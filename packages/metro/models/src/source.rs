//! In-memory row types for each raw data source.
//!
//! Readers turn provider files into these rows; the merger consumes them.
//! Row order is significant: deduplication keeps the first occurrence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A row of the primary (home value + rent) source.
///
/// The primary source defines the full output row set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryRow {
    /// Stable numeric region identifier from the provider.
    pub region_id: u64,
    /// Raw display name (e.g. "Dallas-Fort Worth-Arlington, TX").
    pub name: String,
    /// Provider size rank, if present.
    pub size_rank: Option<u32>,
    /// Authoritative CBSA code, when a crosswalk supplied one.
    pub cbsa_code: Option<String>,
    /// Most recent typical home value.
    pub median_price: Option<f64>,
    /// Typical home value twelve months earlier.
    pub price_12m_ago: Option<f64>,
    /// Most recent typical monthly rent.
    pub monthly_rent: Option<f64>,
    /// Typical monthly rent twelve months earlier.
    pub rent_12m_ago: Option<f64>,
}

/// Which secondary dataset a table came from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SourceKind {
    /// Census annual population estimates.
    Population,
    /// BLS quarterly census of employment and wages.
    Employment,
    /// Census ACS housing vacancy.
    Vacancy,
}

/// The columns a secondary row contributes to a metro record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "source")]
pub enum SecondaryColumns {
    /// Population estimate and growth.
    Population {
        /// Most recent population estimate.
        population: Option<u64>,
        /// Year-over-year growth in percent.
        pop_growth_yoy: Option<f64>,
    },
    /// Private employment growth.
    Employment {
        /// Year-over-year growth in percent.
        job_growth_yoy: Option<f64>,
    },
    /// Housing vacancy.
    Vacancy {
        /// Vacant units over total units, in percent.
        vacancy_rate: Option<f64>,
    },
}

/// A row of a secondary source, keyed by a freeform metro name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryRow {
    /// Raw metro name as published by the provider.
    pub name: String,
    /// Authoritative CBSA code, if the provider publishes one.
    pub cbsa_code: Option<String>,
    /// Values to join onto the matching metro.
    pub columns: SecondaryColumns,
}

/// One secondary dataset, in provider order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryTable {
    /// Dataset identity.
    pub source: SourceKind,
    /// Rows in provider order.
    pub rows: Vec<SecondaryRow>,
}

impl SecondaryTable {
    /// Creates an empty table, used when the dataset is absent.
    #[must_use]
    pub const fn empty(source: SourceKind) -> Self {
        Self {
            source,
            rows: Vec::new(),
        }
    }
}

/// State-level values joined by primary state code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateMetrics {
    /// Curated landlord-friendliness score (1-10) by state code.
    pub landlord_scores: BTreeMap<String, f64>,
    /// Violent crime rate per 100k residents by state code.
    pub crime_rates: BTreeMap<String, f64>,
}
