//! Prelude module for common quakemap types and traits
//!
//! Re-exports the most commonly used items for `use quakemap::prelude::*;`

pub use crate::core::{
    builder::MapBuilder,
    config::{FeedLoadingConfig, FeedLoadingProfile, MapConfig},
    geo::{LatLng, LatLngBounds, TileCoord},
    map::{Map, OverlayKind, OverlayState},
};

pub use crate::layers::{
    base::{LayerTrait, LayerType},
    group::LayerGroup,
    manager::LayerManager,
    marker::CircleMarker,
    tile::TileLayer,
    vector::{PathStyle, Polyline},
};

pub use crate::data::{
    earthquake::{EarthquakeBatch, EarthquakeFeature},
    feed::{FeedFetcher, FeedKind, HttpFeedFetcher},
    geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry},
    plates::PlateBoundary,
};

pub use crate::style::{
    depth::{color_for_depth, DepthBreakpoint, DepthColor, DEPTH_BREAKPOINTS},
    feature::{style_feature, style_feature_with, VisualStyle},
    legend::{legend_entries, LegendEntry},
    magnitude::{radius_for_magnitude, RadiusPolicy},
};

pub use crate::ui::{
    controls::LayerControl,
    elements::Position,
    legend::Legend,
    popup::Popup,
};

pub use crate::tiles::source::{TileSource, UrlTemplateSource};

pub use crate::{Error as MapError, Result};

pub use fxhash::FxHashMap as HashMap;
