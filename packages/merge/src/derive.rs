//! Metrics derived from the primary source's two time series.

use metro_screener_metro_models::MetroRecord;
use metro_screener_metro_models::source::PrimaryRow;
use metro_screener_normalize::{extract_state, normalize};

/// Annual rent as a percentage of price.
///
/// `None` if either value is missing or the price is not positive.
#[must_use]
pub fn gross_yield(median_price: Option<f64>, monthly_rent: Option<f64>) -> Option<f64> {
    let price = median_price.filter(|p| *p > 0.0)?;
    Some(monthly_rent? * 12.0 / price * 100.0)
}

/// Percentage change from `prior` to `current`.
///
/// `None` if either value is missing or `prior` is not positive.
#[must_use]
pub fn growth_pct(current: Option<f64>, prior: Option<f64>) -> Option<f64> {
    let prior = prior.filter(|p| *p > 0.0)?;
    Some((current? - prior) / prior * 100.0)
}

/// Builds the initial record for a primary row: identity, join key,
/// primary state, housing metrics, and derived growth and yield.
#[must_use]
pub fn record_from_primary(row: PrimaryRow) -> MetroRecord {
    let normalized_key = normalize(&row.name);
    let state_code = extract_state(&row.name).map(str::to_string);

    MetroRecord {
        region_id: row.region_id,
        normalized_key,
        state_code,
        cbsa_code: row.cbsa_code,
        size_rank: row.size_rank,
        gross_yield: gross_yield(row.median_price, row.monthly_rent),
        rent_growth_yoy: growth_pct(row.monthly_rent, row.rent_12m_ago),
        price_growth_yoy: growth_pct(row.median_price, row.price_12m_ago),
        median_price: row.median_price,
        price_12m_ago: row.price_12m_ago,
        monthly_rent: row.monthly_rent,
        rent_12m_ago: row.rent_12m_ago,
        name: row.name,
        ..MetroRecord::default()
    }
}
