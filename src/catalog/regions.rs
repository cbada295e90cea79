//! Canonical region codes
//!
//! The valid set is the 50 US state postal codes plus `DC`. A [`RegionCode`]
//! can only be constructed by validating against this set, so any code that
//! exists at runtime is a member of it.

use serde::{Serialize, Serializer};
use std::fmt;

/// Every valid region code, sorted for binary search.
pub const REGION_CODES: [&str; 51] = [
    "AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "IA", "ID", "IL",
    "IN", "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT", "NC", "ND", "NE",
    "NH", "NJ", "NM", "NV", "NY", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VA", "VT", "WA", "WI", "WV", "WY",
];

/// A validated, canonical region code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionCode(&'static str);

impl RegionCode {
    /// Validate `code` (exact, case-sensitive) against the catalog
    pub fn new(code: &str) -> Option<Self> {
        REGION_CODES
            .binary_search(&code)
            .ok()
            .map(|index| RegionCode(REGION_CODES[index]))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Fixed set membership test over canonical codes
pub fn is_valid_region(code: &str) -> bool {
    REGION_CODES.binary_search(&code).is_ok()
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for RegionCode {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl Serialize for RegionCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}
