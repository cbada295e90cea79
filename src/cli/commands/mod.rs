//! Command implementation modules

pub mod parse;
pub mod render;
pub mod table;

pub use parse::run_parse_command;
pub use render::run_render_command;
pub use table::run_table_command;

use crate::config::MapConfig;
use crate::roster::{load_all, BuiltinRoster, FileRoster, RosterRecord, RosterSource};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Sources for the given roster paths; the built-in roster when empty
pub fn roster_sources(paths: &[PathBuf]) -> Result<Vec<Box<dyn RosterSource>>> {
    if paths.is_empty() {
        return Ok(vec![Box::new(BuiltinRoster)]);
    }

    paths
        .iter()
        .map(|path| {
            FileRoster::new(path)
                .map(|source| Box::new(source) as Box<dyn RosterSource>)
                .with_context(|| format!("Invalid roster file '{}'", path.display()))
        })
        .collect()
}

pub async fn load_records(paths: &[PathBuf], config: &MapConfig) -> Result<Vec<RosterRecord>> {
    let sources = roster_sources(paths)?;
    load_all(&sources, &config.layout())
        .await
        .context("Failed to load roster")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_when_no_paths() {
        let sources = roster_sources(&[]).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name(), "built-in roster");
    }

    #[test]
    fn test_file_sources_keep_order() {
        let sources =
            roster_sources(&[PathBuf::from("base.csv"), PathBuf::from("supplement.json")]).unwrap();
        let names: Vec<String> = sources.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["base.csv", "supplement.json"]);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = roster_sources(&[PathBuf::from("roster.xlsx")]).err().unwrap();
        assert!(err.to_string().contains("roster.xlsx"));
    }
}
