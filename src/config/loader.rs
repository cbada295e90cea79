use super::{get_global_config_dir, MapConfig, PROJECT_CONFIG_FILE};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Resolves and reads the map configuration
///
/// Precedence: explicit path, then `territory-map.toml` in the working
/// directory, then `config.toml` in the user config directory, then
/// defaults. Environment overrides apply last.
pub struct ConfigLoader {
    working_dir: PathBuf,
    global_dir: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            global_dir: get_global_config_dir(),
        }
    }

    pub fn with_global_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.global_dir = dir;
        self
    }

    pub async fn load(&self, explicit: Option<&Path>) -> Result<MapConfig> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "Config file '{}' does not exist",
                        path.display()
                    )));
                }
                Some(path.to_path_buf())
            }
            None => self.discover(),
        };

        let mut config = match path {
            Some(path) => {
                info!("Using configuration from {}", path.display());
                Self::read(&path).await?
            }
            None => {
                debug!("No configuration file found, using defaults");
                MapConfig::default()
            }
        };

        config.merge_env_vars();
        config.validate()?;
        Ok(config)
    }

    fn discover(&self) -> Option<PathBuf> {
        let project = self.working_dir.join(PROJECT_CONFIG_FILE);
        if project.is_file() {
            return Some(project);
        }

        self.global_dir
            .as_ref()
            .map(|dir| dir.join("config.toml"))
            .filter(|path| path.is_file())
    }

    /// Read one config file; `.yaml`/`.yml` as YAML, anything else as TOML
    pub async fn read(path: &Path) -> Result<MapConfig> {
        let content = fs::read_to_string(path).await?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let config = if is_yaml {
            serde_yaml::from_str(&content)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?
        } else {
            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?
        };

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn loader(dir: &TempDir) -> ConfigLoader {
        ConfigLoader::new(dir.path()).with_global_dir(None)
    }

    #[tokio::test]
    async fn test_defaults_without_files() {
        let dir = TempDir::new().unwrap();
        let config = loader(&dir).load(None).await.unwrap();
        assert_eq!(config.region_label, MapConfig::default().region_label);
        assert_eq!(config.attributes, MapConfig::default().attributes);
    }

    #[tokio::test]
    async fn test_project_file_is_discovered() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "region_label = \"Territory\"\n",
        )
        .unwrap();

        let config = loader(&dir).load(None).await.unwrap();
        assert_eq!(config.region_label, "Territory");
    }

    #[tokio::test]
    async fn test_global_file_is_fallback() {
        let dir = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        std::fs::write(global.path().join("config.toml"), "[map]\nzoom = 6\n").unwrap();

        let config = ConfigLoader::new(dir.path())
            .with_global_dir(Some(global.path().to_path_buf()))
            .load(None)
            .await
            .unwrap();
        assert_eq!(config.map.zoom, 6);
    }

    #[tokio::test]
    async fn test_explicit_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("map.yaml");
        std::fs::write(&path, "map:\n  title: Territories\n").unwrap();

        let config = loader(&dir).load(Some(path.as_path())).await.unwrap();
        assert_eq!(config.map.title, "Territories");
    }

    #[tokio::test]
    async fn test_missing_explicit_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let err = loader(&dir)
            .load(Some(dir.path().join("nope.toml").as_path()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[tokio::test]
    async fn test_invalid_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[[attributes]]\nname = \"X\"\nlabel = \"X\"\nmerge = \"bag\"\n").unwrap();

        let err = loader(&dir).load(Some(path.as_path())).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
