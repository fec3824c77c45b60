#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Metro-area name normalization.
//!
//! Providers publish the same metro under differently decorated names:
//! - Zillow: `"Dallas-Fort Worth-Arlington, TX"`
//! - Census ACS: `"Dallas-Fort Worth-Arlington, TX Metro Area"`
//! - BLS QCEW: `"Dallas-Fort Worth-Arlington, TX MSA"`
//!
//! [`normalize`] strips the decorations to produce a shared join key. The
//! key is lossy (the state suffix is dropped) and is only ever used for
//! joining, never for display. Matching is suffix based, not a lookup
//! against an authoritative crosswalk, so reformatted names can fail to
//! collide and same-named metros in different states do collide.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for trailing statistical-area descriptors (case-insensitive).
static DESCRIPTOR_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i),?\s*(?:MSA|Metro Area|Metropolitan Statistical Area|Micro Area|Micropolitan Statistical Area)$",
    )
    .expect("valid regex")
});

/// Regex for a trailing state suffix: `, XX` or `, XX-YY-...`.
static STATE_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*[A-Z]{2}(?:-[A-Z]{2})*$").expect("valid regex"));

/// Regex for a state code list following a comma. Group 1 is the list.
static STATE_LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r",\s*([A-Z]{2}(?:-[A-Z]{2})*)(?:\s|$|,)").expect("valid regex")
});

/// Normalizes a metro name into a join key.
///
/// The pipeline:
/// 1. Strip a trailing descriptor (`MSA`, `Metro Area`,
///    `Metropolitan Statistical Area`, `Micro Area`,
///    `Micropolitan Statistical Area`), case-insensitively
/// 2. Strip a trailing uppercase state suffix (`, TX` or `, NY-NJ-PA`)
/// 3. Trim
#[must_use]
pub fn normalize(name: &str) -> String {
    let without_descriptor = DESCRIPTOR_SUFFIX_RE.replace(name.trim(), "");
    let without_state = STATE_SUFFIX_RE.replace(&without_descriptor, "");
    without_state.trim().to_string()
}

/// Extracts the primary state code from a metro name.
///
/// Multi-state metros list several hyphen-joined codes; only the first is
/// returned. Returns `None` if the name carries no uppercase state list.
#[must_use]
pub fn extract_state(name: &str) -> Option<&str> {
    let list = STATE_LIST_RE.captures(name)?.get(1)?.as_str();
    list.split('-').next()
}

/// Returns the lead city of a metro name: the text before the first comma,
/// then before the first hyphen, trimmed.
///
/// `"Dallas-Fort Worth-Arlington, TX"` yields `"Dallas"`. Hyphenated city
/// names are cut short (`"Winston-Salem, NC"` yields `"Winston"`).
#[must_use]
pub fn lead_city(name: &str) -> &str {
    let before_comma = name.split(',').next().unwrap_or_default();
    before_comma.split('-').next().unwrap_or_default().trim()
}
