//! Tag string parsing.
//!
//! Submissions carry tags as a single comma-separated string. Splitting
//! preserves insertion order and duplicates. Empty pieces produced by
//! trailing or repeated commas are kept as-is for compatibility with the
//! existing catalog data.

/// Split a raw comma-separated tag string into individual tags, trimming
/// surrounding whitespace from each piece.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|t| t.trim().to_string()).collect()
}
