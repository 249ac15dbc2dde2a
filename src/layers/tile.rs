use crate::{
    core::{constants, geo::TileCoord},
    layers::base::{LayerProperties, LayerTrait, LayerType},
    tiles::source::{TileSource, UrlTemplateSource},
    Result,
};
use serde::{Deserialize, Serialize};

/// Configuration for a tile layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayerOptions {
    /// Attribution HTML shown in the map corner
    pub attribution: String,
    /// Tile size in pixels
    pub tile_size: u32,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            attribution: constants::OPENSTREETMAP_ATTRIBUTION.to_string(),
            tile_size: constants::TILE_SIZE,
            min_zoom: 0,
            max_zoom: 18,
        }
    }
}

/// A selectable base map backed by a tile server
pub struct TileLayer {
    properties: LayerProperties,
    options: TileLayerOptions,
    source: UrlTemplateSource,
}

impl TileLayer {
    pub fn with_options(
        id: String,
        name: String,
        source: UrlTemplateSource,
        options: TileLayerOptions,
    ) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerType::Tile),
            options,
            source,
        }
    }

    /// Standard OpenStreetMap tiles
    pub fn openstreetmap(id: String, name: String) -> Self {
        let source = UrlTemplateSource::new(constants::OPENSTREETMAP_URL).with_subdomains("abc");
        Self::with_options(id, name, source, TileLayerOptions::default())
    }

    /// Mapbox satellite imagery; 512 px tiles requested one zoom level lower.
    ///
    /// A missing or wrong token only breaks the tile images, never the map.
    pub fn mapbox_satellite(id: String, name: String, access_token: &str) -> Self {
        let source = UrlTemplateSource::new(constants::MAPBOX_SATELLITE_URL)
            .with_access_token(access_token)
            .with_zoom_offset(-1);
        let options = TileLayerOptions {
            attribution: constants::MAPBOX_ATTRIBUTION.to_string(),
            tile_size: 512,
            ..TileLayerOptions::default()
        };
        Self::with_options(id, name, source, options)
    }

    /// CARTO light basemap, used as the grayscale option
    pub fn carto_grayscale(id: String, name: String) -> Self {
        let source = UrlTemplateSource::new(constants::CARTO_LIGHT_URL).with_subdomains("abcd");
        let options = TileLayerOptions {
            attribution: constants::CARTO_ATTRIBUTION.to_string(),
            max_zoom: 19,
            ..TileLayerOptions::default()
        };
        Self::with_options(id, name, source, options)
    }

    pub fn tile_options(&self) -> &TileLayerOptions {
        &self.options
    }

    /// URL for a tile, `None` outside this layer's zoom range
    pub fn tile_url(&self, coord: TileCoord) -> Option<String> {
        if coord.z < self.options.min_zoom || coord.z > self.options.max_zoom || !coord.is_valid()
        {
            return None;
        }
        Some(self.source.url(coord))
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(TileLayer, properties);

    fn options(&self) -> serde_json::Value {
        let mut json = self.properties.describe();
        json["url_template"] = self.source.template().into();
        json["subdomains"] = self.source.subdomains().concat().into();
        json["zoom_offset"] = self.source.zoom_offset().into();
        json["sample_url"] = self
            .source
            .url(TileCoord::new(0, 0, self.options.min_zoom))
            .into();
        json["tile_options"] = serde_json::to_value(&self.options).unwrap_or_default();
        json
    }

    fn set_options(&mut self, options: serde_json::Value) -> Result<()> {
        self.options = serde_json::from_value(options)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openstreetmap_layer() {
        let layer = TileLayer::openstreetmap("outdoors".to_string(), "Outdoors".to_string());
        assert_eq!(layer.layer_type(), LayerType::Tile);
        assert_eq!(layer.tile_options().max_zoom, 18);
        assert_eq!(
            layer.tile_url(TileCoord::new(7, 12, 5)).as_deref(),
            Some("https://b.tile.openstreetmap.org/5/7/12.png")
        );
    }

    #[test]
    fn test_grayscale_allows_zoom_19() {
        let osm = TileLayer::openstreetmap("outdoors".to_string(), "Outdoors".to_string());
        let gray = TileLayer::carto_grayscale("grayscale".to_string(), "Grayscale".to_string());
        let deep = TileCoord::new(0, 0, 19);
        assert!(osm.tile_url(deep).is_none());
        assert!(gray.tile_url(deep).is_some());
    }

    #[test]
    fn test_satellite_carries_token() {
        let layer = TileLayer::mapbox_satellite(
            "satellite".to_string(),
            "Satellite".to_string(),
            "pk.abc",
        );
        assert_eq!(layer.tile_options().tile_size, 512);
        let url = layer.tile_url(TileCoord::new(1, 1, 2)).unwrap();
        assert!(url.ends_with("/tiles/1/1/1?access_token=pk.abc"));
    }

    #[test]
    fn test_set_options_round_trips_zoom_range() {
        let mut layer = TileLayer::openstreetmap("outdoors".to_string(), "Outdoors".to_string());
        let mut options = serde_json::to_value(layer.tile_options()).unwrap();
        options["max_zoom"] = 12.into();
        layer.set_options(options).unwrap();
        assert!(layer.tile_url(TileCoord::new(0, 0, 13)).is_none());

        assert!(layer.set_options(serde_json::json!({"max_zoom": "lots"})).is_err());
    }

    #[test]
    fn test_zoom_beyond_u32_tile_range_has_no_tiles() {
        let mut layer = TileLayer::openstreetmap("outdoors".to_string(), "Outdoors".to_string());
        let mut options = serde_json::to_value(layer.tile_options()).unwrap();
        options["max_zoom"] = 40.into();
        layer.set_options(options).unwrap();

        assert!(layer.tile_url(TileCoord::new(0, 0, 31)).is_some());
        assert!(layer.tile_url(TileCoord::new(0, 0, 32)).is_none());
        assert!(layer.tile_url(TileCoord::new(0, 0, 40)).is_none());
    }
}
