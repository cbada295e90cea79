//! Region aggregation
//!
//! Groups expanded records by region and merges each tracked attribute
//! according to its [`MergePolicy`](super::schema::MergePolicy). Output is
//! ordered by region code. Only regions with at least one record appear.

use super::expander::ExpandedRecord;
use super::schema::AttributeSchema;
use crate::catalog::RegionCode;
use serde::Serialize;
use std::collections::BTreeMap;

/// Merged value of one attribute for one region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedAttribute {
    pub name: String,
    pub label: String,
    /// Empty when no record carried a value
    pub value: String,
}

/// One display-ready row per region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedRegion {
    pub region: RegionCode,
    /// In schema order
    pub merged: Vec<MergedAttribute>,
    pub display_text: String,
}

impl AggregatedRegion {
    /// Merged value for attribute `name`
    pub fn value(&self, name: &str) -> Option<&str> {
        self.merged
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.value.as_str())
    }
}

pub fn aggregate(records: &[ExpandedRecord], schema: &AttributeSchema) -> Vec<AggregatedRegion> {
    let mut groups: BTreeMap<RegionCode, Vec<&ExpandedRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.region).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(region, rows)| aggregate_region(region, &rows, schema))
        .collect()
}

fn aggregate_region(
    region: RegionCode,
    rows: &[&ExpandedRecord],
    schema: &AttributeSchema,
) -> AggregatedRegion {
    let merged: Vec<MergedAttribute> = schema
        .attributes
        .iter()
        .map(|spec| MergedAttribute {
            name: spec.name.clone(),
            label: spec.label.clone(),
            value: spec
                .policy
                .merge(rows.iter().filter_map(|row| row.attribute(&spec.name))),
        })
        .collect();

    let display_text = display_text(&schema.region_label, region, &merged);

    AggregatedRegion {
        region,
        merged,
        display_text,
    }
}

/// Fixed multi-line template: region line, then one line per attribute
///
/// ```text
/// State: TX
/// AE: Scott Kear, Mike B
/// AM: Tony Deleon
/// PM: Tammy Vaughn
/// ```
pub fn display_text(region_label: &str, region: RegionCode, merged: &[MergedAttribute]) -> String {
    let mut lines = Vec::with_capacity(merged.len() + 1);
    lines.push(format!("{}: {}", region_label, region));
    lines.extend(merged.iter().map(|m| format!("{}: {}", m.label, m.value)));
    lines.join("\n")
}
