//! Census Bureau population estimates and ACS housing vacancy.

use std::path::Path;
use std::sync::LazyLock;

use metro_screener_metro_models::source::{
    SecondaryColumns, SecondaryRow, SecondaryTable, SourceKind,
};
use regex::Regex;

use crate::{IngestError, cell, column, csv_reader, number, read_optional_text};

/// Matches annual population estimate columns, capturing the year.
static POPESTIMATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^POPESTIMATE(\d{4})$").expect("valid regex"));

/// Legal/statistical area description of metropolitan rows.
const METRO_LSAD: &str = "Metropolitan Statistical Area";

/// Total housing units.
const TOTAL_UNITS: &str = "B25002_001E";

/// Vacant housing units.
const VACANT_UNITS: &str = "B25002_003E";

/// Geography column the ACS API appends for metro and micro areas.
const ACS_CBSA_COLUMN: &str = "metropolitan statistical area/micropolitan statistical area";

fn missing_column(file: &str, column: &str) -> IngestError {
    IngestError::MissingColumn {
        file: file.to_string(),
        column: column.to_string(),
    }
}

/// Parses the CBSA population estimates CSV.
///
/// Keeps metropolitan rows. The two most recent `POPESTIMATE<year>` columns
/// give the population and its year-over-year growth.
///
/// # Errors
///
/// Returns [`IngestError::MissingColumn`] if `NAME`, `LSAD`, or every
/// estimate column is missing, or a CSV error for unreadable input.
pub fn parse_population(text: &str) -> Result<SecondaryTable, IngestError> {
    const FILE: &str = "census population";

    let mut reader = csv_reader(text);
    let headers = reader.headers()?.clone();

    let name_col = column(&headers, "NAME").ok_or_else(|| missing_column(FILE, "NAME"))?;
    let lsad_col = column(&headers, "LSAD").ok_or_else(|| missing_column(FILE, "LSAD"))?;
    let cbsa_col = column(&headers, "CBSA");

    let mut estimates: Vec<(&str, usize)> = headers
        .iter()
        .enumerate()
        .filter_map(|(i, h)| {
            let year = POPESTIMATE_RE.captures(h.trim())?.get(1)?.as_str();
            Some((year, i))
        })
        .collect();
    estimates.sort_unstable_by(|a, b| b.0.cmp(a.0));

    let Some(&(year, current_col)) = estimates.first() else {
        return Err(missing_column(FILE, "POPESTIMATE<year>"));
    };
    let previous_col = estimates.get(1).map(|(_, i)| *i);
    log::debug!("Using population estimates for {year}");

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if cell(&record, lsad_col) != Some(METRO_LSAD) {
            continue;
        }
        let Some(name) = cell(&record, name_col) else {
            continue;
        };

        let current = number(&record, current_col);
        let previous = previous_col.and_then(|i| number(&record, i));
        let pop_growth_yoy = match (current, previous) {
            (Some(cur), Some(prev)) if prev > 0.0 => Some((cur - prev) / prev * 100.0),
            _ => None,
        };

        rows.push(SecondaryRow {
            name: name.to_string(),
            cbsa_code: cbsa_col.and_then(|i| cell(&record, i)).map(str::to_string),
            columns: SecondaryColumns::Population {
                population: cell(&record, current_col).and_then(|v| v.parse().ok()),
                pop_growth_yoy,
            },
        });
    }

    Ok(SecondaryTable {
        source: SourceKind::Population,
        rows,
    })
}

/// Reads the population file, or an empty table if it is absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be parsed.
pub fn load_population(path: &Path) -> Result<SecondaryTable, IngestError> {
    let Some(text) = read_optional_text(path)? else {
        return Ok(SecondaryTable::empty(SourceKind::Population));
    };
    let table = parse_population(&text)?;
    log::info!("Loaded population data for {} metros", table.rows.len());
    Ok(table)
}

/// Renders a Census API cell, which may be a string, a number, or null.
fn api_cell(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parses a Census ACS API response for housing occupancy.
///
/// The response is an array of rows whose first row is the header. The
/// vacancy rate is vacant units over total units, in percent; it is
/// missing when the total is not positive.
///
/// # Errors
///
/// Returns [`IngestError::MissingColumn`] if `NAME` or either unit count is
/// missing, or a JSON error for malformed input.
pub fn parse_vacancy(text: &str) -> Result<SecondaryTable, IngestError> {
    const FILE: &str = "ACS vacancy";

    let rows: Vec<Vec<serde_json::Value>> = serde_json::from_str(text)?;
    let Some((header, body)) = rows.split_first() else {
        return Ok(SecondaryTable::empty(SourceKind::Vacancy));
    };

    let header: Vec<String> = header.iter().map(|v| api_cell(v).unwrap_or_default()).collect();
    let find = |name: &str| header.iter().position(|h| h == name);

    let name_col = find("NAME").ok_or_else(|| missing_column(FILE, "NAME"))?;
    let total_col = find(TOTAL_UNITS).ok_or_else(|| missing_column(FILE, TOTAL_UNITS))?;
    let vacant_col = find(VACANT_UNITS).ok_or_else(|| missing_column(FILE, VACANT_UNITS))?;
    let cbsa_col = find(ACS_CBSA_COLUMN);

    let value = |row: &[serde_json::Value], i: usize| row.get(i).and_then(api_cell);

    let rows = body
        .iter()
        .filter_map(|row| {
            let row = row.as_slice();
            let name = value(row, name_col)?;
            let total = value(row, total_col).and_then(|v| v.parse::<f64>().ok());
            let vacant = value(row, vacant_col).and_then(|v| v.parse::<f64>().ok());
            let vacancy_rate = match (vacant, total) {
                (Some(vacant), Some(total)) if total > 0.0 => Some(vacant / total * 100.0),
                _ => None,
            };

            Some(SecondaryRow {
                name,
                cbsa_code: cbsa_col.and_then(|i| value(row, i)),
                columns: SecondaryColumns::Vacancy { vacancy_rate },
            })
        })
        .collect();

    Ok(SecondaryTable {
        source: SourceKind::Vacancy,
        rows,
    })
}

/// Reads the ACS vacancy response, or an empty table if it is absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be parsed.
pub fn load_vacancy(path: &Path) -> Result<SecondaryTable, IngestError> {
    let Some(text) = read_optional_text(path)? else {
        return Ok(SecondaryTable::empty(SourceKind::Vacancy));
    };
    let table = parse_vacancy(&text)?;
    log::info!("Loaded vacancy data for {} areas", table.rows.len());
    Ok(table)
}
