use serde::Serialize;
use std::collections::BTreeMap;

/// Marker used by upstream spreadsheets for "no value"
pub const PLACEHOLDER: &str = "-";

/// Normalize a raw cell into an optional value
///
/// Trims whitespace. Empty cells and the bare `-` placeholder become `None`,
/// so placeholders never travel through the pipeline as literal strings.
pub fn normalize_value(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() || trimmed == PLACEHOLDER {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// One roster row: a raw territory label plus its assignments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterRecord {
    pub label: Option<String>,
    pub attributes: BTreeMap<String, Option<String>>,
}

impl RosterRecord {
    pub fn new(label: Option<&str>) -> Self {
        Self {
            label: normalize_value(label),
            attributes: BTreeMap::new(),
        }
    }

    /// Set an attribute, normalizing placeholders to absent
    pub fn with_attribute(mut self, name: impl Into<String>, value: Option<&str>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: Option<&str>) {
        self.attributes.insert(name.into(), normalize_value(value));
    }

    /// Value of `name`, `None` when absent or not tracked
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(|v| v.as_deref())
    }
}
