//! Runtime initialization and setup
//!
//! Resolves the map configuration once at startup and builds the pipeline
//! (catalog plus attribute schema) that every command shares.

use crate::app::{config::AppConfig, logging::init_logging};
use crate::config::{ConfigLoader, MapConfig};
use crate::pipeline::Pipeline;
use anyhow::{Context, Result};
use tracing::debug;

/// Everything a command needs, resolved once
pub struct Runtime {
    pub config: MapConfig,
    pub pipeline: Pipeline,
}

/// Initialize logging, then load configuration and build the pipeline
pub async fn initialize_app(app: &AppConfig) -> Result<Runtime> {
    init_logging(app);
    load_runtime(app).await
}

pub async fn load_runtime(app: &AppConfig) -> Result<Runtime> {
    let config = ConfigLoader::new(&app.working_dir)
        .load(app.config_path.as_deref())
        .await
        .context("Failed to load map configuration")?;

    let pipeline = Pipeline::new(config.catalog(), config.schema());
    debug!(
        "Pipeline ready: {} aliases, {} attributes",
        pipeline.catalog().alias_count(),
        pipeline.schema().attributes.len()
    );

    Ok(Runtime { config, pipeline })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_runtime_applies_config_aliases() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("map.toml");
        std::fs::write(&path, "[aliases]\n\"Pac NW\" = \"OR/WA\"\n").unwrap();

        let app = AppConfig::default()
            .with_working_dir(dir.path().to_path_buf())
            .with_config_path(Some(path));
        let runtime = load_runtime(&app).await.unwrap();

        let regions = crate::pipeline::parse_label(Some("Pac NW"), runtime.pipeline.catalog());
        assert_eq!(regions.len(), 2);
    }
}
