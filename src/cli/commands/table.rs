//! Table command: print the aggregated per-region table

use crate::app::Runtime;
use crate::render::{render_table, TableFormat};
use anyhow::Result;
use std::path::PathBuf;

pub async fn run_table_command(
    rosters: &[PathBuf],
    format: TableFormat,
    runtime: &Runtime,
) -> Result<()> {
    let records = super::load_records(rosters, &runtime.config).await?;
    let regions = runtime.pipeline.run(&records);

    let table = render_table(&regions, runtime.pipeline.schema(), format)?;
    print!("{}", table);
    if format == TableFormat::Json {
        println!();
    }
    Ok(())
}
