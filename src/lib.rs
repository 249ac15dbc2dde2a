//! # quakemap
//!
//! Live earthquake map composition in the spirit of Leaflet.
//!
//! The crate turns the USGS earthquake feed and the PB2002 tectonic-plate
//! boundaries into a typed layer model: depth-colored, magnitude-sized circle
//! markers with popups, plate boundary polylines, three switchable base tile
//! layers, a layer control and a static depth legend. Rendering is left to
//! whatever consumes [`Map::scene`].

pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod style;
pub mod tiles;
pub mod traits;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    builder::MapBuilder,
    config::MapConfig,
    geo::{LatLng, LatLngBounds, TileCoord},
    map::{Map, OverlayKind, OverlayState},
};

pub use layers::{
    base::LayerTrait, group::LayerGroup, marker::CircleMarker, tile::TileLayer, vector::Polyline,
};

pub use ui::{controls::LayerControl, legend::Legend, popup::Popup};

pub use style::{
    depth::{color_for_depth, DepthColor, DEPTH_BREAKPOINTS},
    feature::{style_feature, VisualStyle},
    legend::{legend_entries, LegendEntry},
    magnitude::{radius_for_magnitude, RadiusPolicy},
};

pub use data::{
    earthquake::EarthquakeFeature,
    feed::{FeedFetcher, HttpFeedFetcher},
    geojson::GeoJson,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Http { url: String, status: u16 },

    #[error("Timed out after {timeout_ms} ms fetching {url}")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid feature: {0}")]
    Validation(String),

    #[error("Layer error: {0}")]
    Layer(String),
}

/// Error type alias for convenience
pub type Error = MapError;
