#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI for building the metro screener dataset.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use metro_screener::config::{load_weights, render_config};
use metro_screener::{BuildArgs, run_airports, run_build};

#[derive(Parser)]
#[command(name = "metro_screener", about = "Metro real-estate screener")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the ranked metro dataset from a source snapshot
    Build {
        /// Directory of provider downloads
        #[arg(long, default_value = "data/raw")]
        raw_dir: PathBuf,

        /// Directory of curated files; the dataset is written here by default
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Output path for the dataset
        #[arg(long)]
        output: Option<PathBuf>,

        /// TOML file with a `[weights]` table
        #[arg(long)]
        weights: Option<PathBuf>,

        /// Hub airport JSON file
        #[arg(long)]
        airports: Option<PathBuf>,

        /// `RegionID,CBSA` crosswalk CSV for the primary table
        #[arg(long)]
        crosswalk: Option<PathBuf>,
    },
    /// Write the hub airport reference list
    Airports {
        /// Hub airport JSON file to read instead of the built-in list
        #[arg(long)]
        airports: Option<PathBuf>,

        /// Output path
        #[arg(long, default_value = "data/airports.json")]
        output: PathBuf,
    },
    /// Print the effective score weights as TOML
    Weights {
        /// TOML file with a `[weights]` table
        #[arg(long)]
        weights: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            raw_dir,
            data_dir,
            output,
            weights,
            airports,
            crosswalk,
        } => {
            let coverage = run_build(&BuildArgs {
                raw_dir,
                data_dir,
                output,
                weights,
                airports,
                crosswalk,
            })?;
            log::info!(
                "Build complete: {} metros ranked, {} excluded",
                coverage.total - coverage.excluded,
                coverage.excluded
            );
        }
        Commands::Airports { airports, output } => {
            run_airports(airports.as_deref(), &output)?;
        }
        Commands::Weights { weights } => {
            let weights = load_weights(weights.as_deref())?;
            print!("{}", render_config(&weights)?);
        }
    }

    Ok(())
}
