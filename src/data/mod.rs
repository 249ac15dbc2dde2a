pub mod earthquake;
pub mod feed;
pub mod geojson;
pub mod plates;

pub use earthquake::{EarthquakeBatch, EarthquakeFeature, SkippedFeature};
pub use feed::{FeedFetcher, FeedKind, HttpFeedFetcher};
pub use geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry};
pub use plates::{plate_boundaries, PlateBoundary};
