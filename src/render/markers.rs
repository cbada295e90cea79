use super::centroids::centroid;
use crate::config::{ExtraPoint, MarkerStyle};
use crate::pipeline::AggregatedRegion;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    /// Region code, or the label of an extra point
    pub key: String,
    pub lat: f64,
    pub lon: f64,
    pub tooltip: String,
    /// Plain text, one line per `\n`
    pub popup: String,
}

/// A clustered group of markers sharing one style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLayer {
    pub name: String,
    pub radius: u32,
    pub color: String,
    pub fill_opacity: f64,
    pub popup_max_width: u32,
    pub markers: Vec<MapMarker>,
}

impl MarkerLayer {
    pub fn new(style: &MarkerStyle, markers: Vec<MapMarker>) -> Self {
        Self {
            name: style.layer_name.clone(),
            radius: style.radius,
            color: style.color.clone(),
            fill_opacity: style.fill_opacity,
            popup_max_width: style.popup_max_width,
            markers,
        }
    }
}

pub fn region_markers(
    regions: &[AggregatedRegion],
    overrides: &BTreeMap<String, [f64; 2]>,
) -> Vec<MapMarker> {
    regions
        .iter()
        .map(|region| {
            let (lat, lon) = centroid(region.region.as_str(), overrides);
            MapMarker {
                key: region.region.to_string(),
                lat,
                lon,
                tooltip: region.region.to_string(),
                popup: region.display_text.clone(),
            }
        })
        .collect()
}

pub fn point_markers(points: &[ExtraPoint]) -> Vec<MapMarker> {
    points
        .iter()
        .map(|point| MapMarker {
            key: point.label.clone(),
            lat: point.lat,
            lon: point.lon,
            tooltip: point.label.clone(),
            popup: point.label.clone(),
        })
        .collect()
}
