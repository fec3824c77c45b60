//! BLS Quarterly Census of Employment and Wages, one CSV per metro area.

use std::path::{Path, PathBuf};

use metro_screener_metro_models::source::{
    SecondaryColumns, SecondaryRow, SecondaryTable, SourceKind,
};
use serde::Deserialize;

use crate::{IngestError, read_text};

/// Ownership code for the private sector.
const PRIVATE_OWNERSHIP: &str = "5";

/// Industry code for all industries combined.
const ALL_INDUSTRIES: &str = "10";

/// Aggregation level for MSA, private, all industries.
const MSA_PRIVATE_TOTAL_LEVEL: &str = "41";

/// The subset of a QCEW annual row the screener reads.
#[derive(Debug, Deserialize)]
struct QcewRow {
    area_fips: String,
    own_code: String,
    industry_code: String,
    agglvl_code: String,
    area_title: String,
    oty_annual_avg_emplvl_pct_chg: Option<f64>,
}

impl QcewRow {
    fn is_private_total(&self) -> bool {
        self.own_code == PRIVATE_OWNERSHIP
            && self.industry_code == ALL_INDUSTRIES
            && self.agglvl_code == MSA_PRIVATE_TOTAL_LEVEL
    }
}

/// Converts a QCEW MSA area code (`C1242`) into a CBSA code (`12420`).
#[must_use]
pub fn cbsa_from_area_fips(area_fips: &str) -> Option<String> {
    let digits = area_fips.trim().strip_prefix('C')?;
    (digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit()))
        .then(|| format!("{digits}0"))
}

/// Parses one QCEW area file.
///
/// Returns the first private, all-industry, MSA-level row, or `None` if
/// the file has none.
///
/// # Errors
///
/// Returns a CSV error if the file is unreadable or lacks a required column.
pub fn parse_area_file(text: &str) -> Result<Option<SecondaryRow>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    for result in reader.deserialize::<QcewRow>() {
        let row = result?;
        if row.is_private_total() {
            return Ok(Some(SecondaryRow {
                cbsa_code: cbsa_from_area_fips(&row.area_fips),
                name: row.area_title,
                columns: SecondaryColumns::Employment {
                    job_growth_yoy: row.oty_annual_avg_emplvl_pct_chg,
                },
            }));
        }
    }

    Ok(None)
}

/// Lists the `.csv` files directly under `dir`, sorted by path.
fn csv_files(dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
    let io_error = |e| IngestError::Io {
        path: dir.display().to_string(),
        source: e,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Reads every area file under `dir`, in path order.
///
/// Unreadable files and files without a private total row are skipped. A
/// missing directory yields an empty table.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be listed.
pub fn load_employment(dir: &Path) -> Result<SecondaryTable, IngestError> {
    if !dir.is_dir() {
        log::warn!("{} not found, continuing without it", dir.display());
        return Ok(SecondaryTable::empty(SourceKind::Employment));
    }

    let files = csv_files(dir)?;
    let mut rows = Vec::new();
    let mut skipped = 0;

    for path in &files {
        match read_text(path).and_then(|text| parse_area_file(&text)) {
            Ok(Some(row)) => rows.push(row),
            Ok(None) => skipped += 1,
            Err(e) => {
                log::debug!("Skipping {}: {e}", path.display());
                skipped += 1;
            }
        }
    }

    log::info!(
        "Loaded employment data for {} metros ({} of {} files skipped)",
        rows.len(),
        skipped,
        files.len()
    );

    Ok(SecondaryTable {
        source: SourceKind::Employment,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "\"area_fips\",\"own_code\",\"industry_code\",\"agglvl_code\",\"size_code\",\"year\",\"area_title\",\"annual_avg_emplvl\",\"oty_annual_avg_emplvl_pct_chg\"";

    fn area_csv(rows: &[&str]) -> String {
        let mut csv = format!("{HEADER}\n");
        for row in rows {
            csv.push_str(row);
            csv.push('\n');
        }
        csv
    }

    #[test]
    fn reads_private_total_row() {
        let csv = area_csv(&[
            "\"C1242\",\"0\",\"10\",\"40\",\"0\",\"2024\",\"Austin-Round Rock-San Marcos, TX MSA\",\"1400000\",\"2.9\"",
            "\"C1242\",\"5\",\"10\",\"41\",\"0\",\"2024\",\"Austin-Round Rock-San Marcos, TX MSA\",\"1200000\",\"2.4\"",
            "\"C1242\",\"5\",\"101\",\"42\",\"0\",\"2024\",\"Austin-Round Rock-San Marcos, TX MSA\",\"200000\",\"1.1\"",
        ]);
        let row = parse_area_file(&csv).unwrap().unwrap();
        assert_eq!(row.name, "Austin-Round Rock-San Marcos, TX MSA");
        assert_eq!(row.cbsa_code.as_deref(), Some("12420"));
        assert_eq!(
            row.columns,
            SecondaryColumns::Employment {
                job_growth_yoy: Some(2.4)
            }
        );
    }

    #[test]
    fn file_without_private_total_row_is_none() {
        let csv = area_csv(&[
            "\"C1242\",\"1\",\"10\",\"41\",\"0\",\"2024\",\"Austin-Round Rock-San Marcos, TX MSA\",\"1000\",\"0.5\"",
        ]);
        assert!(parse_area_file(&csv).unwrap().is_none());
    }

    #[test]
    fn empty_growth_is_missing() {
        let csv = area_csv(&[
            "\"C4614\",\"5\",\"10\",\"41\",\"0\",\"2024\",\"Tulsa, OK MSA\",\"400000\",\"\"",
        ]);
        let row = parse_area_file(&csv).unwrap().unwrap();
        assert_eq!(
            row.columns,
            SecondaryColumns::Employment {
                job_growth_yoy: None
            }
        );
    }

    #[test]
    fn converts_area_codes() {
        assert_eq!(cbsa_from_area_fips("C1018").as_deref(), Some("10180"));
        assert_eq!(cbsa_from_area_fips("48000"), None);
        assert_eq!(cbsa_from_area_fips("C12"), None);
    }

    #[test]
    fn reads_directory_in_path_order() {
        let dir = std::env::temp_dir().join(format!("metro_screener_qcew_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("b.csv"),
            area_csv(&["\"C4614\",\"5\",\"10\",\"41\",\"0\",\"2024\",\"Tulsa, OK MSA\",\"1\",\"1.0\""]),
        )
        .unwrap();
        std::fs::write(
            dir.join("a.csv"),
            area_csv(&["\"C3990\",\"5\",\"10\",\"41\",\"0\",\"2024\",\"Reno, NV MSA\",\"1\",\"2.0\""]),
        )
        .unwrap();
        std::fs::write(dir.join("c.csv"), "not,a,qcew\nfile,at,all\n").unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let table = load_employment(&dir).unwrap();
        let names: Vec<&str> = table.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Reno, NV MSA", "Tulsa, OK MSA"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_is_an_empty_table() {
        let dir = std::env::temp_dir().join("metro_screener_qcew_does_not_exist");
        let table = load_employment(&dir).unwrap();
        assert_eq!(table.source, SourceKind::Employment);
        assert!(table.rows.is_empty());
    }
}
