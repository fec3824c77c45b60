//! The pure reconciliation-and-scoring pipeline.
//!
//! Each stage consumes the previous stage's records and returns new ones:
//! merge, geography, scoring, final filter, ranking. Nothing here touches
//! the file system or the clock.

use chrono::{DateTime, Utc};
use metro_screener_geography::GeoResolver;
use metro_screener_geography_models::AirportRecord;
use metro_screener_ingest::Snapshot;
use metro_screener_merge::merge;
use metro_screener_metro_models::ScoreWeights;
use metro_screener_rank::{CoverageSummary, MetroDataset};
use metro_screener_scoring::{retain_rankable, score_all};

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOutput {
    /// The ranked dataset, ready to serialize.
    pub dataset: MetroDataset,
    /// Aggregate counts of missing values and exclusions.
    pub coverage: CoverageSummary,
}

/// Runs every stage over `snapshot`.
///
/// The same snapshot, airports, weights, and timestamp always produce the
/// same output.
#[must_use]
pub fn build_dataset(
    snapshot: Snapshot,
    airports: &[AirportRecord],
    weights: ScoreWeights,
    generated: DateTime<Utc>,
) -> BuildOutput {
    let merged = merge(snapshot.primary, &snapshot.secondaries, &snapshot.states);

    let located = GeoResolver::with_builtin_centroids(airports).resolve_all(merged);

    let scored = score_all(located, &weights);
    let retained = retain_rankable(scored.clone());

    let dataset = MetroDataset::new(retained, weights, generated);
    let coverage = CoverageSummary::new(&scored, &dataset.metros);
    coverage.log();

    BuildOutput { dataset, coverage }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use metro_screener_geography_models::HubTier;
    use metro_screener_metro_models::source::{
        PrimaryRow, SecondaryColumns, SecondaryRow, SecondaryTable, SourceKind, StateMetrics,
    };
    use metro_screener_metro_models::{MarketType, Metric};
    use metro_screener_scoring::{is_growth, is_high_yield};

    use super::*;

    fn generated() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
    }

    fn primary(region_id: u64, name: &str, price: f64, rent: Option<f64>) -> PrimaryRow {
        PrimaryRow {
            region_id,
            name: name.to_string(),
            size_rank: None,
            cbsa_code: None,
            median_price: Some(price),
            price_12m_ago: Some(price * 0.97),
            monthly_rent: rent,
            rent_12m_ago: rent.map(|r| r * 0.96),
        }
    }

    fn row(name: &str, columns: SecondaryColumns) -> SecondaryRow {
        SecondaryRow {
            name: name.to_string(),
            cbsa_code: None,
            columns,
        }
    }

    fn airports() -> Vec<AirportRecord> {
        vec![
            AirportRecord {
                code: "DFW".to_string(),
                name: "Dallas/Fort Worth International".to_string(),
                lat: 32.8998,
                lon: -97.0403,
                hub_tier: HubTier::Large,
            },
            AirportRecord {
                code: "TUL".to_string(),
                name: "Tulsa International".to_string(),
                lat: 36.1984,
                lon: -95.8881,
                hub_tier: HubTier::Medium,
            },
        ]
    }

    fn snapshot() -> Snapshot {
        let population = SecondaryTable {
            source: SourceKind::Population,
            rows: vec![
                row(
                    "Dallas-Fort Worth-Arlington, TX",
                    SecondaryColumns::Population {
                        population: Some(8_100_000),
                        pop_growth_yoy: Some(2.3),
                    },
                ),
                row(
                    "Tulsa, OK",
                    SecondaryColumns::Population {
                        population: Some(1_060_000),
                        pop_growth_yoy: Some(0.9),
                    },
                ),
                row(
                    "Phantom Falls, ZZ",
                    SecondaryColumns::Population {
                        population: Some(1),
                        pop_growth_yoy: Some(99.0),
                    },
                ),
            ],
        };
        let employment = SecondaryTable {
            source: SourceKind::Employment,
            rows: vec![
                row(
                    "Dallas-Fort Worth-Arlington, TX MSA",
                    SecondaryColumns::Employment {
                        job_growth_yoy: Some(2.1),
                    },
                ),
                row(
                    "Dallas-Fort Worth-Arlington, TX MSA",
                    SecondaryColumns::Employment {
                        job_growth_yoy: Some(-5.0),
                    },
                ),
            ],
        };

        let mut states = StateMetrics::default();
        states.landlord_scores.insert("TX".to_string(), 9.0);
        states.landlord_scores.insert("OK".to_string(), 8.0);
        states.crime_rates.insert("TX".to_string(), 431.9);

        Snapshot {
            primary: vec![
                primary(1, "Dallas-Fort Worth-Arlington, TX", 380_000.0, Some(1_950.0)),
                primary(2, "Tulsa, OK", 200_000.0, Some(1_500.0)),
                primary(3, "No Rent, TX", 150_000.0, None),
                primary(4, "Amarillo, TX", 210_000.0, Some(1_300.0)),
            ],
            secondaries: vec![
                population,
                employment,
                SecondaryTable::empty(SourceKind::Vacancy),
            ],
            states,
        }
    }

    fn build() -> BuildOutput {
        build_dataset(snapshot(), &airports(), ScoreWeights::default(), generated())
    }

    #[test]
    fn rebuilding_gives_identical_output() {
        let first = build();
        let second = build();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first.dataset).unwrap(),
            serde_json::to_string(&second.dataset).unwrap()
        );
    }

    #[test]
    fn records_without_rent_are_excluded() {
        let output = build();
        assert_eq!(output.dataset.count, 3);
        assert!(output.dataset.metros.iter().all(|m| m.name != "No Rent, TX"));
        assert_eq!(output.coverage.excluded, 1);
    }

    #[test]
    fn scores_are_bounded_and_ranked() {
        let output = build();
        let scores: Vec<f64> = output
            .dataset
            .metros
            .iter()
            .map(|m| m.composite_score.unwrap())
            .collect();
        assert!(scores.iter().all(|s| (0.0..=100.0).contains(s)));
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));

        let ranks: Vec<usize> = output.dataset.metros.iter().map(|m| m.rank).collect();
        assert_eq!(ranks, [1, 2, 3]);
    }

    #[test]
    fn unmatched_secondary_rows_never_appear() {
        let output = build();
        assert!(output.dataset.metros.iter().all(|m| m.population != Some(1)));

        let mut ids: Vec<u64> = output.dataset.metros.iter().map(|m| m.region_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), output.dataset.count);
    }

    #[test]
    fn duplicate_source_rows_use_the_first() {
        let output = build();
        let dallas = output
            .dataset
            .metros
            .iter()
            .find(|m| m.region_id == 1)
            .unwrap();
        assert_eq!(dallas.job_growth_yoy, Some(2.1));
        assert_eq!(dallas.market_type, Some(MarketType::Growth));
    }

    #[test]
    fn yield_and_proximity_scenarios() {
        let output = build();
        let tulsa = output
            .dataset
            .metros
            .iter()
            .find(|m| m.region_id == 2)
            .unwrap();
        assert_eq!(tulsa.gross_yield, Some(9.0));
        assert_eq!(tulsa.market_type, Some(MarketType::HighYield));
        assert_eq!(tulsa.landlord_score, Some(8));
        assert_eq!(tulsa.crime_rate, None);
        assert_eq!(tulsa.nearest_airport.as_deref(), Some("TUL"));
        assert!(tulsa.airport_distance_miles.unwrap() < 15.0);
    }

    #[test]
    fn state_capital_fallback_still_gets_an_airport() {
        let output = build();
        let amarillo = output
            .dataset
            .metros
            .iter()
            .find(|m| m.region_id == 4)
            .unwrap();
        // Placed at Austin, closer to DFW than to TUL.
        assert_eq!(amarillo.nearest_airport.as_deref(), Some("DFW"));
        assert_eq!(output.coverage.without_coordinates, 0);
    }

    #[test]
    fn market_types_are_consistent_with_predicates() {
        let snapshot = snapshot();
        let merged = merge(snapshot.primary, &snapshot.secondaries, &snapshot.states);
        let scored = score_all(merged, &ScoreWeights::default());

        for record in &scored {
            match record.market_type {
                Some(MarketType::Both) => assert!(is_high_yield(record) && is_growth(record)),
                Some(MarketType::HighYield) => assert!(is_high_yield(record) && !is_growth(record)),
                Some(MarketType::Growth) => assert!(!is_high_yield(record) && is_growth(record)),
                None => assert!(!is_high_yield(record) && !is_growth(record)),
            }
        }
    }

    #[test]
    fn zero_weights_exclude_everything() {
        let weights = ScoreWeights::new(Metric::ALL.iter().map(|&m| (m, 0.0))).unwrap();
        let output = build_dataset(snapshot(), &airports(), weights, generated());
        assert_eq!(output.dataset.count, 0);
        assert_eq!(output.coverage.excluded, 4);
    }

    #[test]
    fn missing_secondary_sources_degrade_scores() {
        let full = build();
        let bare = build_dataset(
            Snapshot {
                secondaries: Vec::new(),
                states: StateMetrics::default(),
                ..snapshot()
            },
            &airports(),
            ScoreWeights::default(),
            generated(),
        );

        assert_eq!(bare.dataset.count, full.dataset.count);
        assert_eq!(bare.coverage.missing_pop_growth, bare.coverage.total);
        let score_of = |output: &BuildOutput, id: u64| {
            output
                .dataset
                .metros
                .iter()
                .find(|m| m.region_id == id)
                .and_then(|m| m.composite_score)
                .unwrap()
        };
        assert!(score_of(&bare, 1) < score_of(&full, 1));
    }
}
