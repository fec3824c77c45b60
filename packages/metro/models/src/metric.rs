//! Scored metrics and their relative weights.

use std::collections::BTreeMap;

use serde::ser::SerializeMap as _;
use serde::{Deserialize, Serialize, Serializer};
use strum_macros::{AsRefStr, Display, EnumString};

/// A metric that contributes to the composite score.
///
/// Declaration order is the canonical order used for weight iteration and
/// serialization.
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
pub enum Metric {
    /// Annual rent over median price, in percent. Higher is better.
    GrossYield,
    /// Year-over-year population growth, in percent. Higher is better.
    PopulationGrowth,
    /// Year-over-year private employment growth, in percent. Higher is better.
    JobGrowth,
    /// Year-over-year rent growth, in percent. Higher is better.
    RentGrowth,
    /// State landlord-friendliness score on a 1-10 scale. Higher is better.
    LandlordScore,
    /// Housing vacancy rate, in percent. Lower is better.
    VacancyRate,
}

impl Metric {
    /// Every metric, in canonical order.
    pub const ALL: &[Self] = &[
        Self::GrossYield,
        Self::PopulationGrowth,
        Self::JobGrowth,
        Self::RentGrowth,
        Self::LandlordScore,
        Self::VacancyRate,
    ];
}

/// Errors produced while building a [`ScoreWeights`] table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightsError {
    /// A weight key does not name a known metric.
    #[error("Unknown metric in weights: '{name}'")]
    UnknownMetric {
        /// The unrecognized key.
        name: String,
    },

    /// A weight is negative, NaN, or infinite.
    #[error("Invalid weight for {metric}: {value} (must be finite and >= 0)")]
    InvalidWeight {
        /// The metric with the bad weight.
        metric: Metric,
        /// The rejected value.
        value: f64,
    },
}

/// Relative metric weights.
///
/// Weights need not sum to any particular total; scoring compares them to
/// their own sum. A metric without an entry is excluded from scoring.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>")]
pub struct ScoreWeights(BTreeMap<Metric, f64>);

impl ScoreWeights {
    /// Builds a weight table, rejecting negative or non-finite weights.
    ///
    /// # Errors
    ///
    /// Returns [`WeightsError::InvalidWeight`] for any weight that is
    /// negative, NaN, or infinite.
    pub fn new(
        weights: impl IntoIterator<Item = (Metric, f64)>,
    ) -> Result<Self, WeightsError> {
        let mut map = BTreeMap::new();
        for (metric, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::InvalidWeight { metric, value });
            }
            map.insert(metric, value);
        }
        Ok(Self(map))
    }

    /// Returns the weight for `metric`, or `None` if it has no entry.
    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.0.get(&metric).copied()
    }

    /// Sum of all configured weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Iterates `(metric, weight)` pairs in canonical metric order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        self.0.iter().map(|(metric, weight)| (*metric, *weight))
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self(BTreeMap::from([
            (Metric::GrossYield, 0.30),
            (Metric::PopulationGrowth, 0.20),
            (Metric::JobGrowth, 0.15),
            (Metric::RentGrowth, 0.15),
            (Metric::LandlordScore, 0.10),
            (Metric::VacancyRate, 0.10),
        ]))
    }
}

impl TryFrom<BTreeMap<String, f64>> for ScoreWeights {
    type Error = WeightsError;

    fn try_from(raw: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut parsed = Vec::with_capacity(raw.len());
        for (name, value) in raw {
            let metric = name
                .parse::<Metric>()
                .map_err(|_| WeightsError::UnknownMetric { name: name.clone() })?;
            parsed.push((metric, value));
        }
        Self::new(parsed)
    }
}

impl Serialize for ScoreWeights {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (metric, weight) in &self.0 {
            map.serialize_entry(metric.as_ref(), weight)?;
        }
        map.end()
    }
}
