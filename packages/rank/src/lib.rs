#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Ranks scored metros and writes the output documents.
//!
//! The dataset document carries the ranked metros and the weights that
//! produced them. Its generation timestamp is supplied by the caller; given
//! the same records, weights, and timestamp the serialized output is
//! byte-identical.

pub mod coverage;
pub mod ranking;

use std::path::Path;

use chrono::{DateTime, Utc};
use metro_screener_geography_models::AirportRecord;
use metro_screener_metro_models::{MetroRecord, ScoreWeights};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use coverage::CoverageSummary;
pub use ranking::{RankedMetro, rank_metros};

/// Errors that can occur while writing output documents.
#[derive(Debug, Error)]
pub enum ExportError {
    /// File system I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The exported metro dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetroDataset {
    /// When the dataset was built.
    pub generated: DateTime<Utc>,
    /// Number of ranked metros.
    pub count: usize,
    /// Weights the composite scores were computed with.
    pub weights: ScoreWeights,
    /// Metros in rank order.
    pub metros: Vec<RankedMetro>,
}

impl MetroDataset {
    /// Ranks `records` and wraps them with the run metadata.
    #[must_use]
    pub fn new(records: Vec<MetroRecord>, weights: ScoreWeights, generated: DateTime<Utc>) -> Self {
        let metros = rank_metros(records);
        Self {
            generated,
            count: metros.len(),
            weights,
            metros,
        }
    }
}

/// Serializes `value` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Writes `value` as pretty-printed JSON to `path`.
///
/// Creates missing parent directories. Writes to a `.tmp` sibling first and
/// renames it into place, so an interrupted run never leaves a truncated
/// file at `path`.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, to_json(value)?)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Writes the metro dataset to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_dataset(path: &Path, dataset: &MetroDataset) -> Result<(), ExportError> {
    write_json(path, dataset)?;
    log::info!("Exported {} metros to {}", dataset.count, path.display());
    Ok(())
}

/// Writes the airport reference list to `path` as a JSON array.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_airports(path: &Path, airports: &[AirportRecord]) -> Result<(), ExportError> {
    write_json(path, &airports)?;
    log::info!("Exported {} airports to {}", airports.len(), path.display());
    Ok(())
}
