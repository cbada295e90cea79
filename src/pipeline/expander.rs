//! Row expansion: one roster record into one record per resolved region

use super::parser::parse_label;
use crate::catalog::{RegionCatalog, RegionCode};
use crate::roster::RosterRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::trace;

/// A roster assignment attached to a single region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedRecord {
    pub region: RegionCode,
    pub attributes: BTreeMap<String, Option<String>>,
}

impl ExpandedRecord {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(|v| v.as_deref())
    }
}

/// Expand `record` into one [`ExpandedRecord`] per region its label resolves to
///
/// Each copy carries the full attribute set. A label that resolves to no
/// region yields nothing.
pub fn expand(record: &RosterRecord, catalog: &RegionCatalog) -> Vec<ExpandedRecord> {
    let regions = parse_label(record.label.as_deref(), catalog);
    if regions.is_empty() {
        trace!(
            "Territory label {:?} resolved to no regions; row skipped",
            record.label
        );
    }

    regions
        .into_iter()
        .map(|region| ExpandedRecord {
            region,
            attributes: record.attributes.clone(),
        })
        .collect()
}

/// Expand every record, preserving arrival order
pub fn expand_all(records: &[RosterRecord], catalog: &RegionCatalog) -> Vec<ExpandedRecord> {
    records
        .iter()
        .flat_map(|record| expand(record, catalog))
        .collect()
}
