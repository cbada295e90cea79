//! Roster ingestion
//!
//! Loads roster tables into [`RosterRecord`]s. Placeholder cells are
//! normalized to absent here, before any parsing happens.

pub mod builtin;
mod record;
pub mod source;

pub use builtin::BuiltinRoster;
pub use record::{normalize_value, RosterRecord, PLACEHOLDER};
pub use source::{load_all, parse_roster, FileRoster, RosterFormat, RosterLayout, RosterSource};
