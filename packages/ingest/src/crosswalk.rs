//! Optional region-to-CBSA crosswalk for the primary table.
//!
//! With a crosswalk, the merger can join secondary sources on the official
//! CBSA code instead of the normalized metro name.

use std::collections::BTreeMap;
use std::path::Path;

use metro_screener_metro_models::source::PrimaryRow;

use crate::{IngestError, cell, column, csv_reader, read_text};

/// Parses a `RegionID,CBSA` CSV. Rows with a non-numeric region id or an
/// empty code are skipped; the first code listed for a region wins.
///
/// # Errors
///
/// Returns [`IngestError::MissingColumn`] if either column is missing, or a
/// CSV error for unreadable input.
pub fn parse_crosswalk(text: &str) -> Result<BTreeMap<u64, String>, IngestError> {
    let mut reader = csv_reader(text);
    let headers = reader.headers()?.clone();

    let missing = |name: &str| IngestError::MissingColumn {
        file: "crosswalk".to_string(),
        column: name.to_string(),
    };
    let id_col = column(&headers, "RegionID").ok_or_else(|| missing("RegionID"))?;
    let cbsa_col = column(&headers, "CBSA").ok_or_else(|| missing("CBSA"))?;

    let mut codes = BTreeMap::new();
    for result in reader.records() {
        let record = result?;
        let Some(region_id) = cell(&record, id_col).and_then(|v| v.parse::<u64>().ok()) else {
            continue;
        };
        if let Some(code) = cell(&record, cbsa_col) {
            codes.entry(region_id).or_insert_with(|| code.to_string());
        }
    }

    Ok(codes)
}

/// Reads a crosswalk file.
///
/// # Errors
///
/// Returns an error if the file is missing or malformed. A crosswalk is
/// only read when one was asked for, so absence is not tolerated.
pub fn load_crosswalk(path: &Path) -> Result<BTreeMap<u64, String>, IngestError> {
    let codes = parse_crosswalk(&read_text(path)?)?;
    log::info!("Loaded CBSA codes for {} regions", codes.len());
    Ok(codes)
}

/// Sets the CBSA code of every primary row listed in `codes`.
#[must_use]
pub fn apply_crosswalk(rows: Vec<PrimaryRow>, codes: &BTreeMap<u64, String>) -> Vec<PrimaryRow> {
    let rows: Vec<PrimaryRow> = rows
        .into_iter()
        .map(|row| PrimaryRow {
            cbsa_code: codes.get(&row.region_id).cloned().or(row.cbsa_code.clone()),
            ..row
        })
        .collect();

    let coded = rows.iter().filter(|r| r.cbsa_code.is_some()).count();
    log::info!("{coded} of {} primary metros have a CBSA code", rows.len());
    rows
}
