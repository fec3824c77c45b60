//! Per-metric mapping of raw values onto a common 0-100 scale.

use metro_screener_metro_models::Metric;

/// Gross yield (percent) that earns a full score.
pub const FULL_SCORE_YIELD: f64 = 12.0;

/// Vacancy rate (percent) at which the vacancy score reaches zero.
pub const ZERO_SCORE_VACANCY: f64 = 20.0;

/// Maps a raw metric value onto the 0-100 scale.
///
/// Every metric except the landlord score is clamped to `[0, 100]`. The
/// landlord score is `score * 10`; its 1-10 domain is enforced when the
/// scores are loaded.
#[must_use]
pub fn normalized_score(metric: Metric, value: f64) -> f64 {
    match metric {
        Metric::GrossYield => clamp_score(value / FULL_SCORE_YIELD * 100.0),
        Metric::PopulationGrowth => clamp_score((value + 1.0) / 4.0 * 100.0),
        Metric::JobGrowth => clamp_score((value + 2.0) / 7.0 * 100.0),
        Metric::RentGrowth => clamp_score((value + 2.0) / 10.0 * 100.0),
        Metric::LandlordScore => value * 10.0,
        Metric::VacancyRate => clamp_score(100.0 - value / ZERO_SCORE_VACANCY * 100.0),
    }
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}
