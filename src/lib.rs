//! # territory-map
//!
//! Normalizes a roster of territory assignments (Account Executive, Account
//! Manager, Project Manager) keyed by loosely formatted territory labels into
//! one record per state, and renders the result as a Leaflet map.
//!
//! ## Usage
//!
//! ```bash
//! territory-map render [--roster roster.csv]... [-o map.html]
//! territory-map table [--format json|csv|text]
//! territory-map parse "OR-WA" "N. LA"
//! ```
//!
//! ## Modules
//!
//! - `catalog` - Valid region codes and the alias table
//! - `pipeline` - Label parsing, row expansion and per-region aggregation
//! - `roster` - Roster records and the sources they are loaded from
//! - `render` - Map markers, Leaflet HTML and table exports
//! - `config` - Map configuration file handling
//! - `app` / `cli` - Binary wiring: logging, runtime, argument parsing
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod roster;

pub use error::{Error, Result};
