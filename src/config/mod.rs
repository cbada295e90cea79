//! Map configuration
//!
//! Every field has a default matching the roster this tool was built for, so
//! a config file only needs to name what differs.

use crate::catalog::RegionCatalog;
use crate::error::{Error, Result};
use crate::pipeline::schema::{default_attributes, AttributeSchema, AttributeSpec};
use crate::roster::RosterLayout;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod loader;

pub use loader::ConfigLoader;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "territory-map.toml";

/// Directory holding the user-wide `config.toml`
pub fn get_global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "territory-map", "territory-map")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Roster column holding the territory label
    pub label_column: String,
    /// Heading of the region line in display text
    pub region_label: String,
    pub attributes: Vec<AttributeSpec>,
    /// Extra aliases, layered over the built-in table
    pub aliases: BTreeMap<String, String>,
    pub map: MapSettings,
    pub markers: MarkerStyle,
    /// Extra or overriding centroids, `code = [lat, lon]`
    pub centroids: BTreeMap<String, [f64; 2]>,
    pub extra_points: Vec<ExtraPoint>,
    pub extra_markers: MarkerStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub title: String,
    pub center: [f64; 2],
    pub zoom: u8,
    /// Preset name (`OpenStreetMap`, `CartoDB positron`, `CartoDB dark_matter`)
    /// or a `{z}/{x}/{y}` URL template
    pub tiles: String,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub layer_name: String,
    pub radius: u32,
    pub color: String,
    pub fill_opacity: f64,
    pub popup_max_width: u32,
}

/// A free-standing labelled point drawn in its own layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraPoint {
    pub label: String,
    pub lat: f64,
    pub lon: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            label_column: "State".to_string(),
            region_label: "State".to_string(),
            attributes: default_attributes(),
            aliases: BTreeMap::new(),
            map: MapSettings::default(),
            markers: MarkerStyle::default(),
            centroids: BTreeMap::new(),
            extra_points: Vec::new(),
            extra_markers: MarkerStyle::extra_points(),
        }
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            title: "Account Roles Map".to_string(),
            center: [39.5, -98.35],
            zoom: 4,
            tiles: "OpenStreetMap".to_string(),
            output: PathBuf::from("maps_output").join("leaflet_map.html"),
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            layer_name: "States".to_string(),
            radius: 6,
            color: "#1f77b4".to_string(),
            fill_opacity: 0.9,
            popup_max_width: 350,
        }
    }
}

impl MarkerStyle {
    /// Red city-style markers for `extra_points`
    pub fn extra_points() -> Self {
        Self {
            layer_name: "Cities".to_string(),
            radius: 7,
            color: "#d62728".to_string(),
            fill_opacity: 0.95,
            popup_max_width: 250,
        }
    }
}

impl MapConfig {
    pub fn merge_env_vars(&mut self) {
        if let Ok(output) = std::env::var("TERRITORY_MAP_OUTPUT") {
            if !output.trim().is_empty() {
                self.map.output = PathBuf::from(output);
            }
        }

        if let Ok(tiles) = std::env::var("TERRITORY_MAP_TILES") {
            if !tiles.trim().is_empty() {
                self.map.tiles = tiles;
            }
        }
    }

    /// Reject settings the pipeline or renderer cannot use
    pub fn validate(&self) -> Result<()> {
        if self.label_column.trim().is_empty() {
            return Err(Error::Config("label_column must not be empty".to_string()));
        }

        if self.attributes.is_empty() {
            return Err(Error::Config(
                "at least one attribute must be configured".to_string(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for attribute in &self.attributes {
            if attribute.name.trim().is_empty() {
                return Err(Error::Config("attribute name must not be empty".to_string()));
            }
            if !seen.insert(attribute.name.as_str()) {
                return Err(Error::Config(format!(
                    "attribute '{}' is configured more than once",
                    attribute.name
                )));
            }
            if attribute.name == self.label_column {
                return Err(Error::Config(format!(
                    "attribute '{}' is also the label column",
                    attribute.name
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.markers.fill_opacity)
            || !(0.0..=1.0).contains(&self.extra_markers.fill_opacity)
        {
            return Err(Error::Config("fill_opacity must be between 0 and 1".to_string()));
        }

        Ok(())
    }

    pub fn schema(&self) -> AttributeSchema {
        AttributeSchema::new(self.region_label.clone(), self.attributes.clone())
    }

    pub fn layout(&self) -> RosterLayout {
        RosterLayout::new(
            self.label_column.clone(),
            self.attributes.iter().map(|a| a.name.clone()).collect(),
        )
    }

    pub fn catalog(&self) -> RegionCatalog {
        RegionCatalog::with_aliases(&self.aliases)
    }
}
