//! Availability-weighted composite score.

use metro_screener_metro_models::{Metric, MetroRecord, ScoreWeights, round_to};

use crate::normalize::normalized_score;

/// Computes a record's composite score.
///
/// Only metrics with a present input value and a configured weight
/// contribute. The weighted mean over those metrics is scaled by the share
/// of total weight they cover, so records with fewer available signals
/// score lower:
///
/// ```text
/// composite = (Σ score·w / Σ w_present) · (Σ w_present / Σ w_all)
/// ```
///
/// The result is rounded to one decimal. Returns `None` when no weighted
/// metric is present or every weight is zero.
#[must_use]
pub fn composite_score(record: &MetroRecord, weights: &ScoreWeights) -> Option<f64> {
    let total_weight = weights.total();
    if total_weight <= 0.0 {
        return None;
    }

    let mut weighted_sum = 0.0;
    let mut present_weight = 0.0;

    for &metric in Metric::ALL {
        let (Some(weight), Some(value)) = (weights.get(metric), record.metric_input(metric))
        else {
            continue;
        };
        weighted_sum += normalized_score(metric, value) * weight;
        present_weight += weight;
    }

    if present_weight <= 0.0 {
        return None;
    }

    let composite = weighted_sum / present_weight * (present_weight / total_weight);
    Some(round_to(composite, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A record whose every metric normalizes to 50.
    fn all_fifty() -> MetroRecord {
        MetroRecord {
            gross_yield: Some(6.0),
            pop_growth_yoy: Some(1.0),
            job_growth_yoy: Some(1.5),
            rent_growth_yoy: Some(3.0),
            landlord_score: Some(5.0),
            vacancy_rate: Some(10.0),
            ..MetroRecord::default()
        }
    }

    #[test]
    fn complete_record_scores_its_weighted_mean() {
        let score = composite_score(&all_fifty(), &ScoreWeights::default()).unwrap();
        assert!((score - 50.0).abs() < 1e-9);
    }

    #[test]
    fn missing_metrics_are_penalized() {
        let yield_only = MetroRecord {
            gross_yield: Some(6.0),
            ..MetroRecord::default()
        };
        let weights = ScoreWeights::default();

        let partial = composite_score(&yield_only, &weights).unwrap();
        let complete = composite_score(&all_fifty(), &weights).unwrap();
        assert!((partial - 15.0).abs() < 1e-9);
        assert!(complete >= partial);
    }

    #[test]
    fn each_added_metric_never_lowers_the_score() {
        let weights = ScoreWeights::default();
        let full = all_fifty();
        let mut record = MetroRecord::default();
        let mut previous = 0.0;

        for &metric in Metric::ALL {
            match metric {
                Metric::GrossYield => record.gross_yield = full.gross_yield,
                Metric::PopulationGrowth => record.pop_growth_yoy = full.pop_growth_yoy,
                Metric::JobGrowth => record.job_growth_yoy = full.job_growth_yoy,
                Metric::RentGrowth => record.rent_growth_yoy = full.rent_growth_yoy,
                Metric::LandlordScore => record.landlord_score = full.landlord_score,
                Metric::VacancyRate => record.vacancy_rate = full.vacancy_rate,
            }
            let score = composite_score(&record, &weights).unwrap();
            assert!(score >= previous, "{metric} lowered {previous} to {score}");
            previous = score;
        }
    }

    #[test]
    fn yield_scenario() {
        let record = MetroRecord {
            gross_yield: Some(9.0),
            ..MetroRecord::default()
        };
        let score = composite_score(&record, &ScoreWeights::default()).unwrap();
        assert!((score - 22.5).abs() < 1e-9);
    }

    #[test]
    fn fractional_landlord_score_contributes() {
        let record = MetroRecord {
            landlord_score: Some(7.5),
            ..MetroRecord::default()
        };
        let score = composite_score(&record, &ScoreWeights::default()).unwrap();
        assert!((score - 7.5).abs() < 1e-9);
    }

    #[test]
    fn best_possible_record_scores_one_hundred() {
        let record = MetroRecord {
            gross_yield: Some(20.0),
            pop_growth_yoy: Some(10.0),
            job_growth_yoy: Some(10.0),
            rent_growth_yoy: Some(10.0),
            landlord_score: Some(10.0),
            vacancy_rate: Some(0.0),
            ..MetroRecord::default()
        };
        let score = composite_score(&record, &ScoreWeights::default()).unwrap();
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn no_present_metric_gives_no_score() {
        assert!(composite_score(&MetroRecord::default(), &ScoreWeights::default()).is_none());
    }

    #[test]
    fn zero_weights_give_no_score() {
        let weights = ScoreWeights::new(Metric::ALL.iter().map(|&m| (m, 0.0))).unwrap();
        assert!(composite_score(&all_fifty(), &weights).is_none());
    }

    #[test]
    fn unweighted_metrics_are_excluded() {
        let weights = ScoreWeights::new([(Metric::GrossYield, 1.0)]).unwrap();
        let record = MetroRecord {
            gross_yield: Some(12.0),
            vacancy_rate: Some(40.0),
            ..MetroRecord::default()
        };
        let score = composite_score(&record, &weights).unwrap();
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn present_metrics_with_zero_weight_give_no_score() {
        let weights =
            ScoreWeights::new([(Metric::GrossYield, 0.0), (Metric::VacancyRate, 1.0)]).unwrap();
        let record = MetroRecord {
            gross_yield: Some(9.0),
            ..MetroRecord::default()
        };
        assert!(composite_score(&record, &weights).is_none());
    }
}
