#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Builds the ranked metro real-estate screener dataset.
//!
//! A build reads a snapshot of provider downloads, reconciles them onto the
//! primary metro list, attaches geography, scores and classifies every
//! metro, and writes the ranked dataset as JSON.

pub mod config;
pub mod pipeline;

use std::path::{Path, PathBuf};

use chrono::Utc;
use metro_screener_geography::airports::default_airports;
use metro_screener_geography_models::AirportRecord;
use metro_screener_ingest::{AIRPORTS_FILE, IngestError, SnapshotPaths, load_airports, load_snapshot};
use metro_screener_rank::{CoverageSummary, ExportError, write_airports, write_dataset};
use thiserror::Error;

/// Default dataset file name under the data directory.
pub const DATASET_FILE: &str = "metros.json";

/// Errors that can occur during a build.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading an input source failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Writing an output document failed.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// File system I/O failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The configuration file is invalid.
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration could not be rendered.
    #[error("Config output error: {0}")]
    ConfigOutput(#[from] toml::ser::Error),
}

/// Arguments for a dataset build.
#[derive(Debug, Clone)]
pub struct BuildArgs {
    /// Directory of provider downloads.
    pub raw_dir: PathBuf,
    /// Directory of curated files and the default output location.
    pub data_dir: PathBuf,
    /// Dataset path. Defaults to `metros.json` under `data_dir`.
    pub output: Option<PathBuf>,
    /// Weights configuration file.
    pub weights: Option<PathBuf>,
    /// Hub airport file. Defaults to `faa_hubs.json` under `data_dir`, then
    /// to the built-in list.
    pub airports: Option<PathBuf>,
    /// `RegionID,CBSA` crosswalk for the primary table.
    pub crosswalk: Option<PathBuf>,
}

impl BuildArgs {
    /// Where the dataset is written.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.data_dir.join(DATASET_FILE))
    }
}

/// Loads hub airports from `path`, or the built-in list when `path` is
/// `None`.
///
/// # Errors
///
/// Returns an error if `path` is given but cannot be read or parsed.
pub fn resolve_airports(path: Option<&Path>) -> Result<Vec<AirportRecord>, PipelineError> {
    match path {
        Some(path) => Ok(load_airports(path)?),
        None => {
            let airports = default_airports();
            log::info!("Using {} built-in hub airports", airports.len());
            Ok(airports)
        }
    }
}

/// Reads the snapshot, runs the pipeline, and writes the dataset.
///
/// # Errors
///
/// Returns an error if the primary source, the weights file, an explicit
/// airports or crosswalk file, or the output cannot be processed. Missing
/// secondary sources are not errors.
pub fn run_build(args: &BuildArgs) -> Result<CoverageSummary, PipelineError> {
    let weights = config::load_weights(args.weights.as_deref())?;

    let default_airports_path = args.data_dir.join(AIRPORTS_FILE);
    let airports_path = args
        .airports
        .clone()
        .or_else(|| default_airports_path.is_file().then_some(default_airports_path));
    let airports = resolve_airports(airports_path.as_deref())?;

    let snapshot = load_snapshot(&SnapshotPaths {
        raw_dir: args.raw_dir.clone(),
        data_dir: args.data_dir.clone(),
        crosswalk: args.crosswalk.clone(),
    })?;

    let output = pipeline::build_dataset(snapshot, &airports, weights, Utc::now());

    let path = args.output_path();
    write_dataset(&path, &output.dataset)?;
    log::info!(
        "Wrote {} ranked metros to {}",
        output.dataset.count,
        path.display()
    );

    Ok(output.coverage)
}

/// Writes the hub airport list used for proximity.
///
/// # Errors
///
/// Returns an error if the airports file cannot be read or the output
/// cannot be written.
pub fn run_airports(airports: Option<&Path>, output: &Path) -> Result<(), PipelineError> {
    let airports = resolve_airports(airports)?;
    write_airports(output, &airports)?;
    log::info!("Wrote {} hub airports to {}", airports.len(), output.display());
    Ok(())
}
