//! Parse command: show how labels resolve

use crate::app::Runtime;
use crate::catalog::RegionCatalog;
use crate::pipeline::parse_label;
use anyhow::Result;

pub fn run_parse_command(labels: &[String], runtime: &Runtime) -> Result<()> {
    for label in labels {
        println!("{}", describe_label(label, runtime.pipeline.catalog()));
    }
    Ok(())
}

/// `"OR-WA" -> [OR, WA]`
pub fn describe_label(label: &str, catalog: &RegionCatalog) -> String {
    let codes: Vec<&str> = parse_label(Some(label), catalog)
        .iter()
        .map(|code| code.as_str())
        .collect();
    format!("\"{}\" -> [{}]", label, codes.join(", "))
}
