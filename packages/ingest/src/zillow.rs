//! Zillow metro time series (ZHVI home values, ZORI rents).
//!
//! Both files are wide tables: identity columns followed by one
//! `YYYY-MM-DD` column per month. Only the latest month and the month
//! twelve columns earlier are kept.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use metro_screener_metro_models::source::PrimaryRow;
use regex::Regex;

use crate::{IngestError, cell, column, csv_reader, number, read_text};

/// Matches monthly value columns.
static DATE_COLUMN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Region type of metropolitan rows; other rows (the national aggregate)
/// are skipped.
const METRO_REGION_TYPE: &str = "msa";

/// Offset of the year-earlier column in the descending date list.
const PRIOR_YEAR_OFFSET: usize = 12;

/// One metro's latest and year-earlier values from a single series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    pub region_id: u64,
    pub name: String,
    pub size_rank: Option<u32>,
    /// Value in the most recent month.
    pub latest: Option<f64>,
    /// Value twelve months before the most recent month.
    pub prior: Option<f64>,
}

fn required(headers: &csv::StringRecord, name: &str) -> Result<usize, IngestError> {
    column(headers, name).ok_or_else(|| IngestError::MalformedPrimarySource {
        column: name.to_string(),
    })
}

/// Parses one Zillow metro CSV.
///
/// # Errors
///
/// Returns [`IngestError::MalformedPrimarySource`] if `RegionID`,
/// `RegionName`, `RegionType`, or every date column is missing, or a CSV
/// error for unreadable input.
pub fn parse_series(text: &str) -> Result<Vec<SeriesRow>, IngestError> {
    let mut reader = csv_reader(text);
    let headers = reader.headers()?.clone();

    let id_col = required(&headers, "RegionID")?;
    let name_col = required(&headers, "RegionName")?;
    let type_col = required(&headers, "RegionType")?;
    let size_col = column(&headers, "SizeRank");

    let mut dates: Vec<(&str, usize)> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim(), i))
        .filter(|(h, _)| DATE_COLUMN_RE.is_match(h))
        .collect();
    if dates.is_empty() {
        return Err(IngestError::MalformedPrimarySource {
            column: "YYYY-MM-DD".to_string(),
        });
    }
    dates.sort_unstable_by(|a, b| b.0.cmp(a.0));

    let latest_col = dates[0].1;
    let prior_col = dates.get(PRIOR_YEAR_OFFSET).map(|(_, i)| *i);
    log::debug!(
        "Latest month {}, year-earlier month {}",
        dates[0].0,
        dates.get(PRIOR_YEAR_OFFSET).map_or("none", |(d, _)| *d)
    );

    let mut rows = Vec::new();
    let mut skipped = 0;

    for result in reader.records() {
        let record = result?;
        if cell(&record, type_col) != Some(METRO_REGION_TYPE) {
            continue;
        }

        let Some(region_id) = cell(&record, id_col).and_then(|v| v.parse().ok()) else {
            skipped += 1;
            continue;
        };

        rows.push(SeriesRow {
            region_id,
            name: cell(&record, name_col).unwrap_or_default().to_string(),
            size_rank: size_col
                .and_then(|i| cell(&record, i))
                .and_then(|v| v.parse().ok()),
            latest: number(&record, latest_col),
            prior: prior_col.and_then(|i| number(&record, i)),
        });
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} metro rows without a numeric RegionID");
    }

    Ok(rows)
}

/// Inner-joins home value and rent series on region id.
///
/// Output follows home value order. A region id repeated in the rent series
/// uses its first row.
#[must_use]
pub fn join_series(home_values: Vec<SeriesRow>, rents: Vec<SeriesRow>) -> Vec<PrimaryRow> {
    let mut rents_by_id = BTreeMap::new();
    for rent in rents {
        rents_by_id.entry(rent.region_id).or_insert(rent);
    }

    let total = home_values.len();
    let joined: Vec<PrimaryRow> = home_values
        .into_iter()
        .filter_map(|home| {
            let rent = rents_by_id.get(&home.region_id)?;
            Some(PrimaryRow {
                region_id: home.region_id,
                name: home.name,
                size_rank: home.size_rank,
                cbsa_code: None,
                median_price: home.latest,
                price_12m_ago: home.prior,
                monthly_rent: rent.latest,
                rent_12m_ago: rent.prior,
            })
        })
        .collect();

    if joined.len() < total {
        log::info!(
            "{} of {total} home value metros have no rent series",
            total - joined.len()
        );
    }

    joined
}

/// Reads and joins the home value and rent files.
///
/// # Errors
///
/// Returns an error if either file is missing or malformed.
pub fn load_primary(zhvi_path: &Path, zori_path: &Path) -> Result<Vec<PrimaryRow>, IngestError> {
    let home_values = parse_series(&read_text(zhvi_path)?)?;
    let rents = parse_series(&read_text(zori_path)?)?;
    log::info!(
        "Loaded {} home value and {} rent metros",
        home_values.len(),
        rents.len()
    );

    let primary = join_series(home_values, rents);
    log::info!("{} metros have both home value and rent data", primary.len());
    Ok(primary)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a series CSV with `months` monthly columns, oldest first.
    fn series_csv(months: u32, rows: &[(&str, &str, &str)]) -> String {
        let dates: Vec<String> = (0..months)
            .map(|m| format!("{}-{:02}-31", 2023 + m / 12, m % 12 + 1))
            .collect();
        let mut csv = format!(
            "RegionID,SizeRank,RegionName,RegionType,StateName,{}\n",
            dates.join(",")
        );
        for (id, name, kind) in rows {
            let values: Vec<String> = (0..months).map(|m| (100 + m).to_string()).collect();
            csv.push_str(&format!("{id},1,\"{name}\",{kind},XX,{}\n", values.join(",")));
        }
        csv
    }

    #[test]
    fn picks_latest_and_year_earlier_columns() {
        let csv = series_csv(14, &[("394913", "Tulsa, OK", "msa")]);
        let rows = parse_series(&csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].region_id, 394_913);
        assert_eq!(rows[0].name, "Tulsa, OK");
        assert_eq!(rows[0].size_rank, Some(1));
        assert_eq!(rows[0].latest, Some(113.0));
        assert_eq!(rows[0].prior, Some(101.0));
    }

    #[test]
    fn short_history_has_no_prior_value() {
        let rows = parse_series(&series_csv(12, &[("1", "Tulsa, OK", "msa")])).unwrap();
        assert_eq!(rows[0].latest, Some(111.0));
        assert_eq!(rows[0].prior, None);
    }

    #[test]
    fn skips_non_metro_rows() {
        let csv = series_csv(
            13,
            &[("102001", "United States", "country"), ("1", "Tulsa, OK", "msa")],
        );
        let rows = parse_series(&csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Tulsa, OK");
    }

    #[test]
    fn empty_cells_are_missing() {
        let csv = "RegionID,RegionName,RegionType,2024-01-31,2024-02-29\n7,\"Reno, NV\",msa,450000,\n";
        let rows = parse_series(csv).unwrap();
        assert_eq!(rows[0].latest, None);
        assert_eq!(rows[0].size_rank, None);
    }

    #[test]
    fn missing_identity_column_is_fatal() {
        let csv = "RegionName,RegionType,2024-01-31\n\"Reno, NV\",msa,450000\n";
        match parse_series(csv) {
            Err(IngestError::MalformedPrimarySource { column }) => assert_eq!(column, "RegionID"),
            other => panic!("expected MalformedPrimarySource, got {other:?}"),
        }
    }

    #[test]
    fn missing_date_columns_are_fatal() {
        let csv = "RegionID,RegionName,RegionType\n7,\"Reno, NV\",msa\n";
        assert!(matches!(
            parse_series(csv),
            Err(IngestError::MalformedPrimarySource { .. })
        ));
    }

    #[test]
    fn join_keeps_home_value_order_and_drops_unmatched() {
        let row = |id: u64, latest: f64| SeriesRow {
            region_id: id,
            name: format!("Metro {id}"),
            size_rank: None,
            latest: Some(latest),
            prior: None,
        };
        let joined = join_series(
            vec![row(3, 300_000.0), row(1, 100_000.0), row(2, 200_000.0)],
            vec![row(1, 1000.0), row(3, 3000.0), row(1, 9999.0)],
        );

        let ids: Vec<u64> = joined.iter().map(|r| r.region_id).collect();
        assert_eq!(ids, [3, 1]);
        assert_eq!(joined[0].median_price, Some(300_000.0));
        assert_eq!(joined[0].monthly_rent, Some(3000.0));
        assert_eq!(joined[1].monthly_rent, Some(1000.0));
    }
}
