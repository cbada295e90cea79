//! Render command: roster to Leaflet HTML

use crate::app::Runtime;
use crate::render::{build_map_view, write_map, HtmlMapRenderer};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

pub async fn run_render_command(
    rosters: &[PathBuf],
    output: Option<PathBuf>,
    runtime: &Runtime,
) -> Result<()> {
    let records = super::load_records(rosters, &runtime.config).await?;
    let regions = runtime.pipeline.run(&records);

    let view = build_map_view(&regions, &runtime.config)?;
    let html = HtmlMapRenderer::new()?.render(&view)?;

    let path = output.unwrap_or_else(|| runtime.config.map.output.clone());
    write_map(&html, &path)
        .await
        .with_context(|| format!("Failed to write map to '{}'", path.display()))?;

    info!("Rendered {} regions from {} roster rows", regions.len(), records.len());
    println!("Leaflet map saved to: {}", path.display());
    Ok(())
}
