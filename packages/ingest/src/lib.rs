#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Readers for the raw source files of a screener build.
//!
//! Each reader parses one provider format into the in-memory row types of
//! `metro_screener_metro_models`. Parsing functions take file contents so
//! they can be exercised without touching disk; `load_*` wrappers add file
//! access. A missing primary file is fatal. A missing secondary or
//! state-level file degrades to an empty table with a warning.

pub mod bls;
pub mod census;
pub mod crosswalk;
pub mod state;
pub mod zillow;

use std::path::{Path, PathBuf};

use metro_screener_geography::GeoError;
use metro_screener_geography_models::AirportRecord;
use metro_screener_metro_models::source::{PrimaryRow, SecondaryTable, StateMetrics};
use thiserror::Error;

/// Home value (ZHVI) file in the raw directory.
pub const ZHVI_FILE: &str = "zhvi_metro.csv";
/// Rent (ZORI) file in the raw directory.
pub const ZORI_FILE: &str = "zori_metro.csv";
/// Census population estimates file in the raw directory.
pub const POPULATION_FILE: &str = "census_cbsa_pop.csv";
/// Directory of per-metro QCEW files in the raw directory.
pub const QCEW_DIR: &str = "qcew_2024_msa";
/// Census ACS vacancy response in the raw directory.
pub const VACANCY_FILE: &str = "acs_vacancy.json";
/// Landlord-friendliness scores in the data directory.
pub const LANDLORD_FILE: &str = "landlord_scores.json";
/// State crime rates in the data directory.
pub const CRIME_FILE: &str = "crime_rates.json";
/// FAA hub airports in the data directory.
pub const AIRPORTS_FILE: &str = "faa_hubs.json";

/// Errors that can occur while reading source files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Reading a file or directory failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that caused the error.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The airport reference file is unusable.
    #[error("Airport data error: {0}")]
    Airports(#[from] GeoError),

    /// The primary home value or rent table lacks a required column.
    #[error("Primary source is missing required column: {column}")]
    MalformedPrimarySource {
        /// Missing column name.
        column: String,
    },

    /// A secondary file is present but lacks a required column.
    #[error("{file} is missing required column: {column}")]
    MissingColumn {
        /// File or dataset name.
        file: String,
        /// Missing column name.
        column: String,
    },
}

/// Everything a build reads, before any reconciliation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Primary rows (home value joined with rent), in provider order.
    pub primary: Vec<PrimaryRow>,
    /// Secondary tables in join order: population, employment, vacancy.
    pub secondaries: Vec<SecondaryTable>,
    /// State-level landlord scores and crime rates.
    pub states: StateMetrics,
}

/// Where a build finds its input files.
#[derive(Debug, Clone)]
pub struct SnapshotPaths {
    /// Directory of provider downloads (Zillow, Census, BLS).
    pub raw_dir: PathBuf,
    /// Directory of curated and derived files (landlord scores, crime rates).
    pub data_dir: PathBuf,
    /// Optional `RegionID,CBSA` crosswalk for the primary table.
    pub crosswalk: Option<PathBuf>,
}

/// Reads every source named by `paths`.
///
/// # Errors
///
/// Returns an error if the primary files are missing or malformed, or if a
/// present secondary file cannot be parsed.
pub fn load_snapshot(paths: &SnapshotPaths) -> Result<Snapshot, IngestError> {
    let mut primary = zillow::load_primary(
        &paths.raw_dir.join(ZHVI_FILE),
        &paths.raw_dir.join(ZORI_FILE),
    )?;

    if let Some(path) = &paths.crosswalk {
        let codes = crosswalk::load_crosswalk(path)?;
        primary = crosswalk::apply_crosswalk(primary, &codes);
    }

    let secondaries = vec![
        census::load_population(&paths.raw_dir.join(POPULATION_FILE))?,
        bls::load_employment(&paths.raw_dir.join(QCEW_DIR))?,
        census::load_vacancy(&paths.raw_dir.join(VACANCY_FILE))?,
    ];

    let states = StateMetrics {
        landlord_scores: state::load_landlord_scores(&paths.data_dir.join(LANDLORD_FILE))?,
        crime_rates: state::load_crime_rates(&paths.data_dir.join(CRIME_FILE))?,
    };

    Ok(Snapshot {
        primary,
        secondaries,
        states,
    })
}

/// Reads an FAA hub airport file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no usable airports.
pub fn load_airports(path: &Path) -> Result<Vec<AirportRecord>, IngestError> {
    let airports = metro_screener_geography::airports::parse_hubs(&read_text(path)?)?;
    log::info!("Loaded {} hub airports from {}", airports.len(), path.display());
    Ok(airports)
}

/// Reads a file as text. Bytes that are not valid UTF-8 are decoded as
/// Latin-1, which some Census files use.
pub(crate) fn read_text(path: &Path) -> Result<String, IngestError> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(decode_text(bytes))
}

/// Like [`read_text`], but a missing file yields `None` and a warning.
pub(crate) fn read_optional_text(path: &Path) -> Result<Option<String>, IngestError> {
    if !path.exists() {
        log::warn!("{} not found, continuing without it", path.display());
        return Ok(None);
    }
    read_text(path).map(Some)
}

pub(crate) fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}

/// Position of the header named `name`, ignoring surrounding whitespace.
pub(crate) fn column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

/// Trimmed cell at `index`, or `None` if absent or empty.
pub(crate) fn cell(record: &csv::StringRecord, index: usize) -> Option<&str> {
    record.get(index).map(str::trim).filter(|v| !v.is_empty())
}

/// Numeric cell at `index`. Unparseable or non-finite values read as
/// missing.
pub(crate) fn number(record: &csv::StringRecord, index: usize) -> Option<f64> {
    cell(record, index)?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

pub(crate) fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes())
}
