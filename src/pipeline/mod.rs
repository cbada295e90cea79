//! Roster normalization pipeline
//!
//! Pure, single-pass transform from roster rows to one display-ready record
//! per region:
//!
//! ```text
//! RosterRecord* -> parser (via expander) -> ExpandedRecord* -> aggregator -> AggregatedRegion*
//! ```
//!
//! The pipeline never fails. Unrecognized territory fragments are dropped
//! and regions without records simply do not appear in the output.

pub mod aggregator;
pub mod expander;
pub mod parser;
pub mod schema;

pub use aggregator::{aggregate, AggregatedRegion, MergedAttribute};
pub use expander::{expand, expand_all, ExpandedRecord};
pub use parser::{parse, parse_label};
pub use schema::{AttributeSchema, AttributeSpec, MergePolicy};

use crate::catalog::RegionCatalog;
use crate::roster::RosterRecord;
use tracing::debug;

/// Catalog and attribute schema bound together for repeated runs
#[derive(Debug, Clone)]
pub struct Pipeline {
    catalog: RegionCatalog,
    schema: AttributeSchema,
}

impl Pipeline {
    pub fn new(catalog: RegionCatalog, schema: AttributeSchema) -> Self {
        Self { catalog, schema }
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    pub fn schema(&self) -> &AttributeSchema {
        &self.schema
    }

    /// Expand and aggregate `records`, preserving their arrival order
    pub fn run(&self, records: &[RosterRecord]) -> Vec<AggregatedRegion> {
        let expanded = expand_all(records, &self.catalog);
        let regions = aggregate(&expanded, &self.schema);

        debug!(
            "Pipeline: {} roster rows -> {} region rows -> {} regions",
            records.len(),
            expanded.len(),
            regions.len()
        );

        regions
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(RegionCatalog::default(), AttributeSchema::default())
    }
}
