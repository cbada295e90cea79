//! Command routing and execution

use crate::app::Runtime;
use crate::cli::args::Commands;
use crate::cli::commands::*;
use anyhow::Result;

/// Execute a CLI command; no command means `render` with defaults
pub async fn execute_command(command: Option<Commands>, runtime: &Runtime) -> Result<()> {
    match command {
        Some(Commands::Render { rosters, output }) => {
            run_render_command(&rosters, output, runtime).await
        }
        Some(Commands::Table { rosters, format }) => {
            run_table_command(&rosters, format, runtime).await
        }
        Some(Commands::Parse { labels }) => run_parse_command(&labels, runtime),
        None => run_render_command(&[], None, runtime).await,
    }
}
