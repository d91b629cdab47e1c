//! Preset identifier parsing and allocation.
//!
//! Identifiers have the form `preset_NNN` where `NNN` is a zero-padded
//! decimal suffix. Allocation scans the existing index, takes the maximum
//! parsed suffix, and returns max+1 (or 1 for an empty index). Entries
//! whose identifier does not carry a numeric suffix are skipped so that
//! malformed legacy entries never block a submission.

/// Prefix shared by all allocated identifiers.
pub const ID_PREFIX: &str = "preset_";

/// Extract the numeric suffix from an identifier, if it has one.
///
/// The token after the first `_` is parsed as a decimal integer:
/// `preset_007` yields `Some(7)`, `legacy` and `preset_x` yield `None`.
pub fn parse_id_number(id: &str) -> Option<u64> {
    id.split('_').nth(1).and_then(|n| n.parse().ok())
}

/// Format a numeric suffix as a full identifier (`7` -> `preset_007`).
/// The suffix is zero-padded to three digits; values >= 1000 simply widen,
/// no truncation ever occurs.
pub fn format_id(number: u64) -> String {
    format!("{ID_PREFIX}{number:03}")
}

/// Allocate the next identifier given the identifiers already present in
/// the index.
///
/// Pure and deterministic: the same input always yields the same
/// identifier, so callers may re-run allocation freely before committing.
pub fn next_id<'a>(existing: impl IntoIterator<Item = &'a str>) -> String {
    let max = existing
        .into_iter()
        .filter_map(parse_id_number)
        .max()
        .unwrap_or(0);
    // Saturate so a pathological legacy suffix can never panic allocation.
    format_id(max.saturating_add(1))
}
