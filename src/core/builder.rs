//! Map builder for fluent API configuration
//!
//! Starts from [`MapConfig::default`] (or a supplied config) and validates
//! the result before composing the [`Map`].

use crate::{
    core::{
        config::{FeedLoadingConfig, FeedLoadingProfile, MapConfig},
        geo::LatLng,
        map::Map,
    },
    style::magnitude::RadiusPolicy,
    MapError, Result,
};

/// Deepest zoom any of the base layers serves.
const MAX_ZOOM: f64 = 22.0;

/// Builder for creating and configuring Map instances
#[derive(Debug, Clone, Default)]
pub struct MapBuilder {
    config: MapConfig,
}

impl MapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: MapConfig) -> Self {
        Self { config }
    }

    /// Defaults plus the Mapbox token from the environment
    pub fn from_env() -> Self {
        Self::from_config(MapConfig::from_env())
    }

    /// Id of the element the map renders into
    pub fn with_container(mut self, container_id: impl Into<String>) -> Self {
        self.config.container_id = container_id.into();
        self
    }

    pub fn with_center_and_zoom(mut self, center: LatLng, zoom: f64) -> Self {
        self.config.center = center;
        self.config.zoom = zoom;
        self
    }

    pub fn with_feed_urls(
        mut self,
        earthquakes: impl Into<String>,
        tectonic_plates: impl Into<String>,
    ) -> Self {
        self.config.earthquake_feed_url = earthquakes.into();
        self.config.tectonic_plates_feed_url = tectonic_plates.into();
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.config.mapbox_access_token = Some(token.into());
        self
    }

    pub fn with_radius_policy(mut self, policy: RadiusPolicy) -> Self {
        self.config.radius_policy = policy;
        self
    }

    /// Use a feed loading preset
    pub fn with_feed_loading(mut self, profile: FeedLoadingProfile) -> Self {
        self.config.feed_loading = profile.resolve();
        self
    }

    /// Override the per-request timeout and retry count, keeping the rest
    pub fn with_feed_retries(mut self, timeout_ms: u64, max_retries: u32) -> Self {
        self.config.feed_loading = FeedLoadingConfig {
            timeout_ms,
            max_retries,
            ..self.config.feed_loading
        };
        self
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Build the map with the configured options
    pub fn build(self) -> Result<Map> {
        let config = self.config;

        if config.container_id.trim().is_empty() {
            return Err(MapError::Validation("container id is empty".to_string()));
        }
        if !(config.center.lat.is_finite() && config.center.lng.is_finite())
            || !config.center.is_valid()
        {
            return Err(MapError::Validation(format!(
                "center out of range: {:?}",
                config.center
            )));
        }
        if !(0.0..=MAX_ZOOM).contains(&config.zoom) {
            return Err(MapError::Validation(format!(
                "zoom {} outside 0..={}",
                config.zoom, MAX_ZOOM
            )));
        }
        for url in [&config.earthquake_feed_url, &config.tectonic_plates_feed_url] {
            if url.trim().is_empty() {
                return Err(MapError::Validation("feed url is empty".to_string()));
            }
        }

        Map::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::map::OverlayKind;

    #[test]
    fn test_builder_defaults() {
        let map = MapBuilder::new().build().unwrap();
        assert_eq!(map.config().container_id, "map");
        assert_eq!(map.center(), LatLng::new(37.09, -95.71));
        assert_eq!(map.zoom(), 5.0);
    }

    #[test]
    fn test_builder_overrides() {
        let map = MapBuilder::new()
            .with_container("quake-map")
            .with_center_and_zoom(LatLng::new(35.68, 139.69), 6.0)
            .with_feed_urls("http://localhost/quakes.json", "http://localhost/plates.json")
            .with_access_token("pk.test")
            .with_radius_policy(RadiusPolicy::Legacy)
            .with_feed_retries(2_000, 1)
            .build()
            .unwrap();

        let config = map.config();
        assert_eq!(config.container_id, "quake-map");
        assert_eq!(config.radius_policy, RadiusPolicy::Legacy);
        assert_eq!(config.feed_loading.timeout_ms, 2_000);
        assert_eq!(config.feed_loading.max_retries, 1);
        assert!(config.feed_loading.exponential_backoff);
        assert_eq!(
            map.feed_url(OverlayKind::TectonicPlates),
            "http://localhost/plates.json"
        );
        assert_eq!(config.access_token_or_placeholder(), "pk.test");
    }

    #[test]
    fn test_feed_loading_preset() {
        let builder = MapBuilder::new().with_feed_loading(FeedLoadingProfile::LowLatency);
        assert_eq!(builder.config().feed_loading.max_retries, 0);
    }

    #[test]
    fn test_rejects_invalid_view() {
        assert!(MapBuilder::new()
            .with_center_and_zoom(LatLng::new(120.0, 0.0), 5.0)
            .build()
            .is_err());
        assert!(MapBuilder::new()
            .with_center_and_zoom(LatLng::new(0.0, 0.0), 30.0)
            .build()
            .is_err());
        assert!(MapBuilder::new()
            .with_center_and_zoom(LatLng::new(f64::NAN, 0.0), 5.0)
            .build()
            .is_err());
        assert!(MapBuilder::new().with_container(" ").build().is_err());
    }
}
