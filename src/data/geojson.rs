use crate::core::geo::LatLng;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// A GeoJSON position: `[longitude, latitude]` with an optional third value.
/// USGS uses the third value for hypocenter depth in kilometers.
pub type Position = Vec<f64>;

/// GeoJSON geometry types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: Position,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

/// A feature as it arrives from a feed.
///
/// Geometry and properties are kept as raw JSON so that one malformed
/// feature cannot fail the whole collection; typed access goes through
/// [`GeoJsonFeature::geometry`] and [`GeoJsonFeature::property`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub geometry: serde_json::Value,
    #[serde(default)]
    pub properties: serde_json::Value,
}

impl GeoJsonFeature {
    /// Feature id as text, when the feed provides one.
    pub fn id_string(&self) -> Option<String> {
        match &self.id {
            Some(serde_json::Value::String(id)) => Some(id.clone()),
            Some(serde_json::Value::Number(id)) => Some(id.to_string()),
            _ => None,
        }
    }

    /// Typed geometry, or a validation error when it is absent or malformed.
    pub fn geometry(&self) -> Result<GeoJsonGeometry> {
        if self.geometry.is_null() {
            return Err(MapError::Validation("missing geometry".to_string()));
        }
        GeoJsonGeometry::deserialize(&self.geometry)
            .map_err(|e| MapError::Validation(format!("malformed geometry: {}", e)))
    }

    /// A property value; `None` when absent or JSON `null`.
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.get(key).filter(|v| !v.is_null())
    }
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection { features: Vec<GeoJsonFeature> },
}

impl GeoJson {
    /// Parses a GeoJSON document
    pub fn from_str(geojson_str: &str) -> Result<Self> {
        serde_json::from_str(geojson_str)
            .map_err(|e| MapError::ParseError(format!("Invalid GeoJSON: {}", e)))
    }

    /// All features, a lone feature counting as a collection of one
    pub fn features(&self) -> &[GeoJsonFeature] {
        match self {
            GeoJson::Feature(feature) => std::slice::from_ref(feature),
            GeoJson::FeatureCollection { features } => features,
        }
    }
}

impl GeoJsonGeometry {
    /// The geometry as drawable paths: one per line string and one per
    /// polygon ring. Points produce no paths.
    pub fn paths(&self) -> Vec<Vec<LatLng>> {
        match self {
            GeoJsonGeometry::Point { .. } | GeoJsonGeometry::MultiPoint { .. } => Vec::new(),
            GeoJsonGeometry::LineString { coordinates } => vec![Self::to_path(coordinates)],
            GeoJsonGeometry::Polygon { coordinates }
            | GeoJsonGeometry::MultiLineString { coordinates } => {
                coordinates.iter().map(|line| Self::to_path(line)).collect()
            }
            GeoJsonGeometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flatten()
                .map(|ring| Self::to_path(ring))
                .collect(),
            GeoJsonGeometry::GeometryCollection { geometries } => {
                geometries.iter().flat_map(|geom| geom.paths()).collect()
            }
        }
    }

    fn to_path(positions: &[Position]) -> Vec<LatLng> {
        positions
            .iter()
            .filter_map(|p| LatLng::from_position(p))
            .collect()
    }
}
