//! CLI argument structures

use crate::render::TableFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Normalize a territory roster and render it as an interactive map
#[derive(Parser)]
#[command(name = "territory-map")]
#[command(about = "territory-map - Turn a territory assignment roster into a per-state map", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file (TOML, or YAML with a .yaml/.yml extension)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the roster as a Leaflet map (default command)
    #[command(name = "render")]
    Render {
        /// Roster file (.csv, .json, .yaml, .toml); repeat to append supplements in order.
        /// The built-in roster is used when none is given.
        #[arg(short = 'r', long = "roster", value_name = "FILE")]
        rosters: Vec<PathBuf>,

        /// Output HTML file (defaults to the configured map output)
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the aggregated per-region table
    #[command(name = "table")]
    Table {
        /// Roster file (.csv, .json, .yaml, .toml); repeat to append supplements in order
        #[arg(short = 'r', long = "roster", value_name = "FILE")]
        rosters: Vec<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = TableFormat::Text)]
        format: TableFormat,
    },

    /// Show the regions each territory label resolves to
    #[command(name = "parse")]
    Parse {
        /// Territory labels, e.g. "OR-WA" "N. LA"
        #[arg(required = true)]
        labels: Vec<String>,
    },
}
