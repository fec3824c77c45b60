#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Reconciles every source into one record per primary-source metro.
//!
//! The primary table defines the row set. Secondary tables are left-joined
//! in the order given, each keyed by CBSA code when both sides have one and
//! by normalized name otherwise. State-level values are joined last, by
//! primary state code.

pub mod derive;
pub mod join;

use metro_screener_metro_models::MetroRecord;
use metro_screener_metro_models::source::{PrimaryRow, SecondaryTable, StateMetrics};

pub use derive::{gross_yield, growth_pct, record_from_primary};
pub use join::{SourceIndex, apply_columns, join_state_metrics, left_join};

/// Builds the unified metro table.
///
/// Output order is primary input order and the output has exactly one
/// record per primary row.
#[must_use]
pub fn merge(
    primary: Vec<PrimaryRow>,
    secondaries: &[SecondaryTable],
    states: &StateMetrics,
) -> Vec<MetroRecord> {
    let records: Vec<MetroRecord> = primary.into_iter().map(record_from_primary).collect();
    log::info!("Built {} metro records from the primary source", records.len());

    let records = secondaries.iter().fold(records, left_join);

    let records: Vec<MetroRecord> = records
        .into_iter()
        .map(|record| join_state_metrics(record, states))
        .collect();

    let with_landlord = records.iter().filter(|r| r.landlord_score.is_some()).count();
    let with_crime = records.iter().filter(|r| r.crime_rate.is_some()).count();
    log::info!(
        "State-level values: landlord score for {with_landlord}, crime rate for {with_crime} of {} metros",
        records.len()
    );

    records
}
