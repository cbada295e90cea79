use super::markers::MarkerLayer;
use crate::error::{Error, Result};
use serde::Serialize;
use tera::{Context, Tera};

/// Base tile layer of the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
}

impl TileLayer {
    /// Resolve a preset name or accept a raw `{z}/{x}/{y}` URL template
    pub fn resolve(tiles: &str) -> Result<Self> {
        let preset = |url: &str, attribution: &str| TileLayer {
            url: url.to_string(),
            attribution: attribution.to_string(),
        };

        match tiles.trim().to_lowercase().as_str() {
            "openstreetmap" => Ok(preset(
                "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
            )),
            "cartodb positron" => Ok(preset(
                "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
                "&copy; OpenStreetMap contributors &copy; CARTO",
            )),
            "cartodb dark_matter" => Ok(preset(
                "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
                "&copy; OpenStreetMap contributors &copy; CARTO",
            )),
            _ if tiles.contains("{z}") && tiles.contains("{x}") && tiles.contains("{y}") => {
                Ok(preset(tiles.trim(), ""))
            }
            _ => Err(Error::Config(format!(
                "Unknown tile layer '{}' (use OpenStreetMap, CartoDB positron, CartoDB dark_matter or a {{z}}/{{x}}/{{y}} URL)",
                tiles
            ))),
        }
    }
}

/// Everything the page needs, embedded as one JSON value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub title: String,
    pub center: [f64; 2],
    pub zoom: u8,
    pub tiles: TileLayer,
    pub layers: Vec<MarkerLayer>,
}

pub struct HtmlMapRenderer {
    template_engine: Tera,
}

impl HtmlMapRenderer {
    pub fn new() -> Result<Self> {
        let mut template_engine = Tera::default();
        template_engine.add_raw_template("map.html", MAP_TEMPLATE)?;
        Ok(Self { template_engine })
    }

    pub fn render(&self, view: &MapView) -> Result<String> {
        let mut context = Context::new();
        context.insert("title", &view.title);
        context.insert("map_json", &script_safe_json(view)?);

        Ok(self.template_engine.render("map.html", &context)?)
    }
}

/// JSON that can sit inside a `<script>` element
fn script_safe_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?
        .replace("</", "<\\/")
        .replace("<!--", "<\\!--"))
}

const MAP_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
    <link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css">
    <link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css">
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <script src="https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js"></script>
    <style>
        html, body { height: 100%; margin: 0; padding: 0; }
        #map { position: absolute; top: 0; bottom: 0; left: 0; right: 0; }
    </style>
</head>
<body>
    <div id="map"></div>
    <script>
        const MAP = {{ map_json | safe }};

        function escapeHtml(text) {
            return String(text)
                .replace(/&/g, "&amp;")
                .replace(/</g, "&lt;")
                .replace(/>/g, "&gt;")
                .replace(/"/g, "&quot;")
                .replace(/'/g, "&#39;");
        }

        const map = L.map("map").setView(MAP.center, MAP.zoom);
        L.tileLayer(MAP.tiles.url, { attribution: MAP.tiles.attribution, maxZoom: 19 }).addTo(map);

        const overlays = {};
        MAP.layers.forEach(function (layer) {
            const cluster = L.markerClusterGroup();
            layer.markers.forEach(function (marker) {
                const popup = marker.popup.split("\n").map(escapeHtml).join("<br>");
                L.circleMarker([marker.lat, marker.lon], {
                    radius: layer.radius,
                    color: layer.color,
                    fill: true,
                    fillColor: layer.color,
                    fillOpacity: layer.fill_opacity
                })
                    .bindPopup(popup, { maxWidth: layer.popup_max_width })
                    .bindTooltip(escapeHtml(marker.tooltip))
                    .addTo(cluster);
            });
            cluster.addTo(map);
            overlays[layer.name] = cluster;
        });

        L.control.layers(null, overlays).addTo(map);
    </script>
</body>
</html>
"#;
