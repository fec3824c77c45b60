//! Aggregate view of per-record degradations.

use std::collections::BTreeMap;

use metro_screener_metro_models::{MarketType, MetroRecord};
use serde::Serialize;

use crate::RankedMetro;

/// Counts of records missing each optional value, over the scored set,
/// plus the market-type mix of the ranked output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageSummary {
    /// Records entering the final filter.
    pub total: usize,
    pub missing_pop_growth: usize,
    pub missing_job_growth: usize,
    pub missing_vacancy: usize,
    pub missing_landlord_score: usize,
    pub missing_crime_rate: usize,
    pub missing_rent_growth: usize,
    pub missing_price_growth: usize,
    /// Records the fallback chain could not place.
    pub without_coordinates: usize,
    /// Records dropped by the final filter.
    pub excluded: usize,
    /// Ranked records per market-type label. Untagged records are not
    /// counted.
    pub market_types: BTreeMap<String, usize>,
}

impl CoverageSummary {
    /// Summarizes `scored` (before the final filter) and `ranked` (after).
    #[must_use]
    pub fn new(scored: &[MetroRecord], ranked: &[RankedMetro]) -> Self {
        let missing = |field: fn(&MetroRecord) -> bool| scored.iter().filter(|r| field(r)).count();

        let mut market_types = BTreeMap::new();
        for market_type in ranked.iter().filter_map(|m| m.market_type) {
            *market_types
                .entry(market_type.label().to_string())
                .or_insert(0) += 1;
        }

        Self {
            total: scored.len(),
            missing_pop_growth: missing(|r| r.pop_growth_yoy.is_none()),
            missing_job_growth: missing(|r| r.job_growth_yoy.is_none()),
            missing_vacancy: missing(|r| r.vacancy_rate.is_none()),
            missing_landlord_score: missing(|r| r.landlord_score.is_none()),
            missing_crime_rate: missing(|r| r.crime_rate.is_none()),
            missing_rent_growth: missing(|r| r.rent_growth_yoy.is_none()),
            missing_price_growth: missing(|r| r.price_growth_yoy.is_none()),
            without_coordinates: missing(|r| r.coordinates.is_none()),
            excluded: scored.len().saturating_sub(ranked.len()),
            market_types,
        }
    }

    /// Number of ranked records tagged `market_type`.
    #[must_use]
    pub fn market_type_count(&self, market_type: MarketType) -> usize {
        self.market_types
            .get(market_type.label())
            .copied()
            .unwrap_or(0)
    }

    /// Logs the summary at `info`.
    pub fn log(&self) {
        log::info!(
            "Coverage over {} metros: missing population growth {}, job growth {}, vacancy {}, \
             landlord score {}, crime rate {}, rent growth {}, price growth {}",
            self.total,
            self.missing_pop_growth,
            self.missing_job_growth,
            self.missing_vacancy,
            self.missing_landlord_score,
            self.missing_crime_rate,
            self.missing_rent_growth,
            self.missing_price_growth,
        );
        log::info!(
            "{} metros without coordinates, {} excluded from ranking",
            self.without_coordinates,
            self.excluded
        );
        for (label, count) in &self.market_types {
            log::info!("{label}: {count} metros");
        }
    }
}
