//! Left joins of secondary and state-level sources onto metro records.

use std::collections::BTreeMap;

use metro_screener_metro_models::MetroRecord;
use metro_screener_metro_models::source::{
    SecondaryColumns, SecondaryRow, SecondaryTable, StateMetrics,
};
use metro_screener_normalize::normalize;

/// First-wins lookup over one secondary table.
///
/// Rows are indexed by CBSA code (when present) and by normalized name.
/// Each index keeps the first row seen for a key; later duplicates are
/// counted and ignored.
#[derive(Debug)]
pub struct SourceIndex<'a> {
    by_cbsa: BTreeMap<&'a str, &'a SecondaryColumns>,
    by_name: BTreeMap<String, &'a SecondaryColumns>,
    duplicates: usize,
}

impl<'a> SourceIndex<'a> {
    /// Indexes `rows` in order.
    #[must_use]
    pub fn new(rows: &'a [SecondaryRow]) -> Self {
        let mut by_cbsa = BTreeMap::new();
        let mut by_name = BTreeMap::new();
        let mut duplicates = 0;

        for row in rows {
            if let Some(code) = row.cbsa_code.as_deref() {
                by_cbsa.entry(code).or_insert(&row.columns);
            }

            let key = normalize(&row.name);
            if by_name.contains_key(&key) {
                duplicates += 1;
            } else {
                by_name.insert(key, &row.columns);
            }
        }

        Self {
            by_cbsa,
            by_name,
            duplicates,
        }
    }

    /// Number of rows shadowed by an earlier row with the same name key.
    #[must_use]
    pub const fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Finds the row for `record`.
    ///
    /// A CBSA code match is preferred when the record carries one and the
    /// source published it; otherwise the normalized name key decides.
    #[must_use]
    pub fn lookup(&self, record: &MetroRecord) -> Option<&'a SecondaryColumns> {
        if let Some(code) = record.cbsa_code.as_deref()
            && let Some(columns) = self.by_cbsa.get(code)
        {
            return Some(columns);
        }
        self.by_name.get(&record.normalized_key).copied()
    }
}

/// Returns `record` with the columns of one secondary row filled in.
#[must_use]
pub fn apply_columns(record: MetroRecord, columns: &SecondaryColumns) -> MetroRecord {
    match *columns {
        SecondaryColumns::Population {
            population,
            pop_growth_yoy,
        } => MetroRecord {
            population,
            pop_growth_yoy,
            ..record
        },
        SecondaryColumns::Employment { job_growth_yoy } => MetroRecord {
            job_growth_yoy,
            ..record
        },
        SecondaryColumns::Vacancy { vacancy_rate } => MetroRecord {
            vacancy_rate,
            ..record
        },
    }
}

/// Left-joins one secondary table onto `records`.
///
/// Every record comes back exactly once, in input order. Records without a
/// match keep their current values for this source's columns; source rows
/// that match no record are dropped.
#[must_use]
pub fn left_join(records: Vec<MetroRecord>, table: &SecondaryTable) -> Vec<MetroRecord> {
    let index = SourceIndex::new(&table.rows);
    if index.duplicates() > 0 {
        log::debug!(
            "{}: ignored {} duplicate rows",
            table.source,
            index.duplicates()
        );
    }

    let mut matched = 0;
    let joined: Vec<MetroRecord> = records
        .into_iter()
        .map(|record| match index.lookup(&record) {
            Some(columns) => {
                matched += 1;
                apply_columns(record, columns)
            }
            None => record,
        })
        .collect();

    log::info!(
        "{}: matched {} of {} metros ({} source rows)",
        table.source,
        matched,
        joined.len(),
        table.rows.len()
    );

    joined
}

/// Returns `record` with state-level values for its primary state.
///
/// Records without a state code are returned unchanged.
#[must_use]
pub fn join_state_metrics(record: MetroRecord, states: &StateMetrics) -> MetroRecord {
    let Some(state) = record.state_code.as_deref() else {
        return record;
    };

    MetroRecord {
        landlord_score: states.landlord_scores.get(state).copied(),
        crime_rate: states.crime_rates.get(state).copied(),
        ..record
    }
}
