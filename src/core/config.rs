//! Configuration for the earthquake map and its feed loading behavior
//!
//! Feed loading tuning follows a preset system: pick a
//! [`FeedLoadingProfile`] or supply custom [`FeedLoadingConfig`] values.

use crate::core::{constants, geo::LatLng};
use crate::style::magnitude::RadiusPolicy;

#[derive(Debug, Clone, PartialEq)]
pub enum FeedLoadingProfile {
    Balanced,
    /// Fail fast: short timeout, no retries.
    LowLatency,
    /// Slow or flaky networks.
    Patient,
    Custom(FeedLoadingConfig),
}

impl FeedLoadingProfile {
    pub fn resolve(&self) -> FeedLoadingConfig {
        match self {
            Self::Balanced => FeedLoadingConfig {
                timeout_ms: 15_000,
                max_retries: 2,
                retry_delay_ms: 500,
                exponential_backoff: true,
            },
            Self::LowLatency => FeedLoadingConfig {
                timeout_ms: 5_000,
                max_retries: 0,
                retry_delay_ms: 0,
                exponential_backoff: false,
            },
            Self::Patient => FeedLoadingConfig {
                timeout_ms: 60_000,
                max_retries: 5,
                retry_delay_ms: 1_000,
                exponential_backoff: true,
            },
            Self::Custom(config) => config.clone(),
        }
    }
}

impl Default for FeedLoadingProfile {
    fn default() -> Self {
        Self::Balanced
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedLoadingConfig {
    /// Per-request timeout, covering connect and body download.
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
    pub exponential_backoff: bool,
}

impl FeedLoadingConfig {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }

    /// Upper bound on the time one feed can take, retries included.
    pub fn worst_case_ms(&self) -> u64 {
        let mut total = self.timeout_ms;
        for attempt in 1..=self.max_retries {
            let delay = crate::traits::retry_delay_with_backoff(
                attempt,
                self.max_retries,
                self.retry_delay_ms,
                self.exponential_backoff,
            )
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
            total = total.saturating_add(delay).saturating_add(self.timeout_ms);
        }
        total
    }
}

impl Default for FeedLoadingConfig {
    fn default() -> Self {
        FeedLoadingProfile::default().resolve()
    }
}

/// Everything needed to compose one map instance
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub container_id: String,
    pub center: LatLng,
    pub zoom: f64,
    pub earthquake_feed_url: String,
    pub tectonic_plates_feed_url: String,
    /// Mapbox token for the satellite base layer.
    pub mapbox_access_token: Option<String>,
    pub radius_policy: RadiusPolicy,
    pub feed_loading: FeedLoadingConfig,
}

impl MapConfig {
    /// Defaults plus the Mapbox token from `MAPBOX_ACCESS_TOKEN`, if set.
    pub fn from_env() -> Self {
        let token = std::env::var(constants::MAPBOX_TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty());
        if token.is_none() {
            log::warn!(
                "{} is not set; satellite tiles will fail to load",
                constants::MAPBOX_TOKEN_ENV
            );
        }
        Self {
            mapbox_access_token: token,
            ..Self::default()
        }
    }

    /// Token substituted into the satellite URL, placeholder when unset.
    pub fn access_token_or_placeholder(&self) -> &str {
        self.mapbox_access_token
            .as_deref()
            .unwrap_or(constants::MAPBOX_TOKEN_PLACEHOLDER)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        let (lat, lng) = constants::DEFAULT_CENTER;
        Self {
            container_id: constants::DEFAULT_CONTAINER_ID.to_string(),
            center: LatLng::new(lat, lng),
            zoom: constants::DEFAULT_ZOOM,
            earthquake_feed_url: constants::EARTHQUAKE_FEED_URL.to_string(),
            tectonic_plates_feed_url: constants::TECTONIC_PLATES_FEED_URL.to_string(),
            mapbox_access_token: None,
            radius_policy: RadiusPolicy::default(),
            feed_loading: FeedLoadingConfig::default(),
        }
    }
}
