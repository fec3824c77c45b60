//! State-level landlord-friendliness scores and crime rates.

use std::collections::BTreeMap;
use std::path::Path;

use metro_screener_geography_models::states::is_state_code;
use serde::Deserialize;

use crate::{IngestError, read_optional_text};

/// Lowest valid landlord score.
pub const MIN_LANDLORD_SCORE: f64 = 1.0;

/// Highest valid landlord score.
pub const MAX_LANDLORD_SCORE: f64 = 10.0;

#[derive(Debug, Deserialize)]
struct LandlordEntry {
    score: f64,
}

#[derive(Debug, Deserialize)]
struct LandlordDocument {
    scores: BTreeMap<String, LandlordEntry>,
}

#[derive(Debug, Deserialize)]
struct CrimeDocument {
    #[serde(default)]
    rates: BTreeMap<String, Option<f64>>,
}

/// Parses `landlord_scores.json` (`{"scores": {"TX": {"score": 8}}}`).
///
/// Entries with an unknown state code or a score outside 1 to 10 are
/// dropped with a warning.
///
/// # Errors
///
/// Returns a JSON error if the document is malformed.
pub fn parse_landlord_scores(json: &str) -> Result<BTreeMap<String, f64>, IngestError> {
    let doc: LandlordDocument = serde_json::from_str(json)?;

    let mut scores = BTreeMap::new();
    for (state, entry) in doc.scores {
        if !is_state_code(&state) {
            log::warn!("Ignoring landlord score for unknown state {state:?}");
            continue;
        }
        if (MIN_LANDLORD_SCORE..=MAX_LANDLORD_SCORE).contains(&entry.score) {
            scores.insert(state, entry.score);
        } else {
            log::warn!("Ignoring out-of-range landlord score {} for {state}", entry.score);
        }
    }

    Ok(scores)
}

/// Parses `crime_rates.json` (`{"rates": {"TX": 431.9}}`).
///
/// Null, negative, and non-finite rates are dropped. Entries with an
/// unknown state code are dropped with a warning.
///
/// # Errors
///
/// Returns a JSON error if the document is malformed.
pub fn parse_crime_rates(json: &str) -> Result<BTreeMap<String, f64>, IngestError> {
    let doc: CrimeDocument = serde_json::from_str(json)?;

    let mut rates = BTreeMap::new();
    for (state, rate) in doc.rates {
        if !is_state_code(&state) {
            log::warn!("Ignoring crime rate for unknown state {state:?}");
            continue;
        }
        if let Some(rate) = rate.filter(|r| r.is_finite() && *r >= 0.0) {
            rates.insert(state, rate);
        }
    }

    Ok(rates)
}

/// Reads landlord scores, or an empty mapping if the file is absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be parsed.
pub fn load_landlord_scores(path: &Path) -> Result<BTreeMap<String, f64>, IngestError> {
    let Some(text) = read_optional_text(path)? else {
        return Ok(BTreeMap::new());
    };
    let scores = parse_landlord_scores(&text)?;
    log::info!("Loaded landlord scores for {} states", scores.len());
    Ok(scores)
}

/// Reads crime rates, or an empty mapping if the file is absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be parsed.
pub fn load_crime_rates(path: &Path) -> Result<BTreeMap<String, f64>, IngestError> {
    let Some(text) = read_optional_text(path)? else {
        return Ok(BTreeMap::new());
    };
    let rates = parse_crime_rates(&text)?;
    log::info!("Loaded crime rates for {} states", rates.len());
    Ok(rates)
}
