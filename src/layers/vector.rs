use crate::{
    core::geo::{LatLng, LatLngBounds},
    data::plates::PlateBoundary,
    layers::base::{LayerProperties, LayerTrait, LayerType},
};
use serde::{Deserialize, Serialize};

/// Stroke options for line features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
}

impl PathStyle {
    /// Plate boundaries: solid orange, two pixels wide
    pub fn plate_boundary() -> Self {
        Self {
            color: "orange".to_string(),
            weight: 2.0,
            opacity: 1.0,
        }
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: "#3388ff".to_string(),
            weight: 3.0,
            opacity: 1.0,
        }
    }
}

/// One or more connected paths drawn with a shared style
pub struct Polyline {
    properties: LayerProperties,
    paths: Vec<Vec<LatLng>>,
    style: PathStyle,
}

impl Polyline {
    pub fn new(id: String, paths: Vec<Vec<LatLng>>, style: PathStyle) -> Self {
        let properties = LayerProperties::new(id, "Polyline".to_string(), LayerType::Vector);
        Self {
            properties,
            paths,
            style,
        }
    }

    pub fn for_plate_boundary(id: String, boundary: &PlateBoundary) -> Self {
        let mut polyline = Self::new(id, boundary.paths.clone(), PathStyle::plate_boundary());
        if let Some(name) = &boundary.name {
            polyline.properties.name = name.clone();
        }
        polyline
    }

    pub fn paths(&self) -> &[Vec<LatLng>] {
        &self.paths
    }

    pub fn style(&self) -> &PathStyle {
        &self.style
    }

    pub fn point_count(&self) -> usize {
        self.paths.iter().map(Vec::len).sum()
    }
}

impl LayerTrait for Polyline {
    crate::impl_layer_trait!(Polyline, properties);

    fn options(&self) -> serde_json::Value {
        let mut json = self.properties.describe();
        json["paths"] = serde_json::json!(self.paths);
        json["style"] = serde_json::json!(self.style);
        json
    }

    /// Only the style can be changed; the geometry comes from the feed.
    fn set_options(&mut self, options: serde_json::Value) -> crate::Result<()> {
        self.style = serde_json::from_value(options)?;
        Ok(())
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        let points: Vec<LatLng> = self.paths.iter().flatten().copied().collect();
        LatLngBounds::from_points(&points)
    }
}
