//! Presentation adapter
//!
//! Turns aggregated regions into map markers and renders them as a
//! standalone Leaflet page, or as a plain table.

pub mod centroids;
pub mod html;
pub mod markers;
pub mod table;

pub use centroids::{centroid, FALLBACK_CENTROID};
pub use html::{HtmlMapRenderer, MapView, TileLayer};
pub use markers::{point_markers, region_markers, MapMarker, MarkerLayer};
pub use table::{render_table, TableFormat};

use crate::config::MapConfig;
use crate::error::Result;
use crate::pipeline::AggregatedRegion;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Assemble the map view: one layer of region markers, plus the extra
/// points layer when any are configured
pub fn build_map_view(regions: &[AggregatedRegion], config: &MapConfig) -> Result<MapView> {
    let mut layers = vec![MarkerLayer::new(
        &config.markers,
        region_markers(regions, &config.centroids),
    )];

    if !config.extra_points.is_empty() {
        layers.push(MarkerLayer::new(
            &config.extra_markers,
            point_markers(&config.extra_points),
        ));
    }

    Ok(MapView {
        title: config.map.title.clone(),
        center: config.map.center,
        zoom: config.map.zoom,
        tiles: TileLayer::resolve(&config.map.tiles)?,
        layers,
    })
}

/// Write `html` to `path`, creating parent directories
pub async fn write_map(html: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, html).await?;
    debug!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtraPoint;
    use crate::pipeline::Pipeline;
    use crate::roster::RosterRecord;
    use tempfile::TempDir;

    #[test]
    fn test_view_without_extra_points_has_one_layer() {
        let regions = Pipeline::default().run(&[RosterRecord::new(Some("OR-WA"))]);
        let view = build_map_view(&regions, &MapConfig::default()).unwrap();

        assert_eq!(view.layers.len(), 1);
        assert_eq!(view.layers[0].name, "States");
        assert_eq!(view.layers[0].markers.len(), 2);
        assert_eq!(view.zoom, 4);
    }

    #[test]
    fn test_view_with_extra_points() {
        let mut config = MapConfig::default();
        config.extra_points = vec![ExtraPoint {
            label: "Sacramento".to_string(),
            lat: 38.5816,
            lon: -121.4944,
        }];

        let view = build_map_view(&[], &config).unwrap();

        assert_eq!(view.layers.len(), 2);
        assert!(view.layers[0].markers.is_empty());
        assert_eq!(view.layers[1].name, "Cities");
    }

    #[test]
    fn test_unknown_tiles_fail_view() {
        let mut config = MapConfig::default();
        config.map.tiles = "Nowhere Maps".to_string();
        assert!(build_map_view(&[], &config).is_err());
    }

    #[tokio::test]
    async fn test_write_map_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("maps_output").join("leaflet_map.html");

        write_map("<html></html>", &path).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }
}
