use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a coordinate from a GeoJSON position, which is ordered `[lng, lat, ...]`
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [lng, lat, ..] => Some(Self::new(*lat, *lng)),
            _ => None,
        }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Smallest bounds containing every point, `None` for an empty slice
    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(*first, *first);
        for point in rest {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Returns the union of this bounds with another bounds
    pub fn union(&self, other: &LatLngBounds) -> LatLngBounds {
        let mut merged = self.clone();
        merged.extend(&other.south_west);
        merged.extend(&other.north_east);
        merged
    }
}

/// Represents a tile coordinate in the slippy map tile system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Checks if the tile is valid for its zoom level. Zoom levels whose
    /// tile count does not fit in a `u32` have no valid tiles.
    pub fn is_valid(&self) -> bool {
        match 1_u32.checked_shl(self.z as u32) {
            Some(max_coord) => self.x < max_coord && self.y < max_coord,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_geojson_position() {
        let coord = LatLng::from_position(&[-155.28, 19.40, 31.5]).unwrap();
        assert_eq!(coord.lat, 19.40);
        assert_eq!(coord.lng, -155.28);
        assert!(coord.is_valid());

        assert!(LatLng::from_position(&[-155.28]).is_none());
    }

    #[test]
    fn test_bounds_from_points() {
        let bounds = LatLngBounds::from_points(&[
            LatLng::new(37.09, -95.71),
            LatLng::new(61.2, -149.9),
            LatLng::new(19.4, -155.3),
        ])
        .unwrap();

        assert_eq!(bounds.south_west, LatLng::new(19.4, -155.3));
        assert_eq!(bounds.north_east, LatLng::new(61.2, -95.71));
        assert!(LatLngBounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_bounds_union() {
        let conus = LatLngBounds::new(LatLng::new(24.0, -125.0), LatLng::new(50.0, -66.0));
        let alaska = LatLngBounds::new(LatLng::new(51.0, -170.0), LatLng::new(71.0, -130.0));
        let merged = conus.union(&alaska);
        assert_eq!(merged.south_west, LatLng::new(24.0, -170.0));
        assert_eq!(merged.north_east, LatLng::new(71.0, -66.0));
    }

    #[test]
    fn test_tile_coord_validity() {
        assert!(TileCoord::new(7, 12, 5).is_valid());
        assert!(!TileCoord::new(32, 0, 5).is_valid());
        assert!(!TileCoord::new(u32::MAX, 0, 31).is_valid());
        assert!(TileCoord::new((1 << 31) - 1, 0, 31).is_valid());
    }

    #[test]
    fn test_tile_coord_beyond_u32_zoom_is_invalid() {
        assert!(!TileCoord::new(0, 0, 32).is_valid());
        assert!(!TileCoord::new(0, 0, u8::MAX).is_valid());
    }
}
