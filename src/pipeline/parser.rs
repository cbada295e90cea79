//! Territory label parsing
//!
//! Turns one free-text label into zero or more canonical region codes:
//! 1. normalize (uppercase, strip `.`/spaces, `-` becomes `/`)
//! 2. resolve the whole normalized label through the alias table
//! 3. split on `/`
//! 4. keep only valid region codes
//!
//! Unrecognized fragments are dropped without error. The output is not
//! deduplicated and follows token order.
//!
//! # Examples
//!
//! ```
//! use territory_map::pipeline::parser::parse;
//!
//! let codes: Vec<&str> = parse(Some("OR-WA")).iter().map(|c| c.as_str()).collect();
//! assert_eq!(codes, vec!["OR", "WA"]);
//! assert!(parse(None).is_empty());
//! ```

use crate::catalog::{normalize_token, RegionCatalog, RegionCode, SEPARATOR};
use tracing::trace;

/// Parse `label` against the standard catalog
pub fn parse(label: Option<&str>) -> Vec<RegionCode> {
    parse_label(label, RegionCatalog::standard())
}

/// Parse `label` against `catalog`
pub fn parse_label(label: Option<&str>, catalog: &RegionCatalog) -> Vec<RegionCode> {
    let normalized = normalize_token(label.unwrap_or_default());
    if normalized.is_empty() {
        return Vec::new();
    }

    let resolved = catalog.resolve_alias(&normalized).unwrap_or(&normalized);

    resolved
        .split(SEPARATOR)
        .filter_map(|token| {
            let code = catalog.region(token);
            if code.is_none() && !token.is_empty() {
                trace!("Dropping unrecognized territory token '{}'", token);
            }
            code
        })
        .collect()
}
