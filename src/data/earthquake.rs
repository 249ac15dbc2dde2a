//! Typed earthquake events validated from the USGS GeoJSON summary feed

use crate::{
    core::geo::LatLng,
    data::geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry},
    MapError, Result,
};

/// Shown in popups when a feed entry carries no place name.
pub const UNKNOWN_PLACE: &str = "Unknown location";

/// One earthquake, with every value the styler and popup need guaranteed
/// present and finite.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeFeature {
    pub id: Option<String>,
    pub magnitude: f64,
    /// Hypocenter depth in kilometers; negative above sea level.
    pub depth: f64,
    pub place: String,
    pub position: LatLng,
    /// Origin time in milliseconds since the Unix epoch.
    pub time: Option<i64>,
}

impl TryFrom<&GeoJsonFeature> for EarthquakeFeature {
    type Error = MapError;

    fn try_from(feature: &GeoJsonFeature) -> Result<Self> {
        let coordinates = match feature.geometry()? {
            GeoJsonGeometry::Point { coordinates } => coordinates,
            other => {
                return Err(MapError::Validation(format!(
                    "expected Point geometry, found {}",
                    geometry_name(&other)
                )))
            }
        };

        let (lng, lat, depth) = match coordinates.as_slice() {
            [lng, lat, depth, ..] => (*lng, *lat, *depth),
            _ => {
                return Err(MapError::Validation(format!(
                    "point has {} coordinates, need longitude, latitude and depth",
                    coordinates.len()
                )))
            }
        };
        if !(lng.is_finite() && lat.is_finite() && depth.is_finite()) {
            return Err(MapError::Validation("non-finite coordinate".to_string()));
        }
        let position = LatLng::new(lat, lng);
        if !position.is_valid() {
            return Err(MapError::Validation(format!(
                "coordinates out of range: {}, {}",
                lat, lng
            )));
        }

        let magnitude = feature
            .property("mag")
            .ok_or_else(|| MapError::Validation("missing magnitude".to_string()))?
            .as_f64()
            .filter(|m| m.is_finite())
            .ok_or_else(|| MapError::Validation("magnitude is not a number".to_string()))?;

        let place = feature
            .property("place")
            .and_then(|p| p.as_str())
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(UNKNOWN_PLACE)
            .to_string();

        let time = feature.property("time").and_then(|t| t.as_i64());

        Ok(Self {
            id: feature.id_string(),
            magnitude,
            depth,
            place,
            position,
            time,
        })
    }
}

fn geometry_name(geometry: &GeoJsonGeometry) -> &'static str {
    match geometry {
        GeoJsonGeometry::Point { .. } => "Point",
        GeoJsonGeometry::LineString { .. } => "LineString",
        GeoJsonGeometry::Polygon { .. } => "Polygon",
        GeoJsonGeometry::MultiPoint { .. } => "MultiPoint",
        GeoJsonGeometry::MultiLineString { .. } => "MultiLineString",
        GeoJsonGeometry::MultiPolygon { .. } => "MultiPolygon",
        GeoJsonGeometry::GeometryCollection { .. } => "GeometryCollection",
    }
}

/// A feed entry that failed validation
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFeature {
    /// Position in the feed's feature array.
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}

/// Result of validating a whole earthquake feed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EarthquakeBatch {
    pub features: Vec<EarthquakeFeature>,
    pub skipped: Vec<SkippedFeature>,
}

impl EarthquakeBatch {
    pub fn from_geojson(geojson: &GeoJson) -> Self {
        let mut batch = Self::default();

        for (index, feature) in geojson.features().iter().enumerate() {
            match EarthquakeFeature::try_from(feature) {
                Ok(quake) => batch.features.push(quake),
                Err(e) => {
                    log::debug!("Skipping earthquake feature #{}: {}", index, e);
                    batch.skipped.push(SkippedFeature {
                        index,
                        id: feature.id_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if !batch.skipped.is_empty() {
            log::warn!(
                "Skipped {} malformed earthquake feature(s) out of {}",
                batch.skipped.len(),
                batch.skipped.len() + batch.features.len()
            );
        }

        batch
    }
}
