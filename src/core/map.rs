use crate::{
    core::{config::MapConfig, constants, geo::LatLng},
    data::{
        earthquake::EarthquakeBatch,
        feed::{FeedFetcher, FeedKind},
        geojson::GeoJson,
        plates::plate_boundaries,
    },
    layers::{
        base::LayerTrait, group::LayerGroup, manager::LayerManager, marker::CircleMarker,
        tile::TileLayer, vector::Polyline,
    },
    style::magnitude::RadiusPolicy,
    ui::{controls::LayerControl, legend::Legend},
    MapError, Result,
};
use futures::stream::{self, StreamExt};
use serde::Serialize;

pub use crate::layers::group::OverlayState;

const OUTDOORS_LAYER_ID: &str = "outdoors";
const SATELLITE_LAYER_ID: &str = "satellite";
const GRAYSCALE_LAYER_ID: &str = "grayscale";

const TECTONIC_PLATES_Z_INDEX: i32 = 10;
const EARTHQUAKES_Z_INDEX: i32 = 20;

/// The two data overlays a map carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    Earthquakes,
    TectonicPlates,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 2] = [OverlayKind::Earthquakes, OverlayKind::TectonicPlates];

    pub fn layer_id(&self) -> &'static str {
        match self {
            OverlayKind::Earthquakes => "earthquakes",
            OverlayKind::TectonicPlates => "tectonic_plates",
        }
    }

    /// Name shown in the layer control
    pub fn name(&self) -> &'static str {
        match self {
            OverlayKind::Earthquakes => constants::EARTHQUAKES_OVERLAY_NAME,
            OverlayKind::TectonicPlates => constants::TECTONIC_PLATES_OVERLAY_NAME,
        }
    }

    pub fn feed_kind(&self) -> FeedKind {
        match self {
            OverlayKind::Earthquakes => FeedKind::Earthquakes,
            OverlayKind::TectonicPlates => FeedKind::TectonicPlates,
        }
    }
}

/// A composed earthquake map: three base layers, two data overlays, a depth
/// legend and a layer control.
///
/// Each `Map` owns all of its containers, so several can coexist.
pub struct Map {
    config: MapConfig,
    layer_manager: LayerManager,
    layer_control: LayerControl,
    legend: Legend,
}

impl Map {
    /// Composes the map with empty overlays in the `Loading` state
    pub fn new(config: MapConfig) -> Result<Self> {
        let mut layer_manager = LayerManager::new();
        let mut layer_control = LayerControl::default();

        let token = config.access_token_or_placeholder().to_string();
        let base_layers = [
            TileLayer::openstreetmap(
                OUTDOORS_LAYER_ID.to_string(),
                constants::OUTDOORS_LAYER_NAME.to_string(),
            ),
            TileLayer::mapbox_satellite(
                SATELLITE_LAYER_ID.to_string(),
                constants::SATELLITE_LAYER_NAME.to_string(),
                &token,
            ),
            TileLayer::carto_grayscale(
                GRAYSCALE_LAYER_ID.to_string(),
                constants::GRAYSCALE_LAYER_NAME.to_string(),
            ),
        ];
        for (index, mut layer) in base_layers.into_iter().enumerate() {
            // Outdoors is the default base layer
            layer.set_visible(index == 0);
            layer_control.add_base_layer(layer.name(), layer.id());
            layer_manager.add_layer(Box::new(layer))?;
        }

        for (kind, z_index) in [
            (OverlayKind::TectonicPlates, TECTONIC_PLATES_Z_INDEX),
            (OverlayKind::Earthquakes, EARTHQUAKES_Z_INDEX),
        ] {
            let group = LayerGroup::new(kind.layer_id().to_string(), kind.name().to_string())
                .with_z_index(z_index);
            layer_manager.add_layer(Box::new(group))?;
        }
        // Control lists earthquakes above plates
        for kind in OverlayKind::ALL {
            layer_control.add_overlay(kind.name(), kind.layer_id());
        }

        log::debug!(
            "Composed map '{}' at {:?} zoom {}",
            config.container_id,
            config.center,
            config.zoom
        );

        Ok(Self {
            config,
            layer_manager,
            layer_control,
            legend: Legend::new(),
        })
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn center(&self) -> LatLng {
        self.config.center
    }

    pub fn zoom(&self) -> f64 {
        self.config.zoom
    }

    pub fn layers(&self) -> &LayerManager {
        &self.layer_manager
    }

    pub fn layer_control(&self) -> &LayerControl {
        &self.layer_control
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn feed_url(&self, kind: OverlayKind) -> &str {
        match kind {
            OverlayKind::Earthquakes => &self.config.earthquake_feed_url,
            OverlayKind::TectonicPlates => &self.config.tectonic_plates_feed_url,
        }
    }

    pub fn overlay(&self, kind: OverlayKind) -> Option<&LayerGroup> {
        self.layer_manager.get_layer_as::<LayerGroup>(kind.layer_id())
    }

    pub fn overlay_state(&self, kind: OverlayKind) -> Option<&OverlayState> {
        self.overlay(kind).map(|group| group.state())
    }

    /// The single base layer currently shown
    pub fn base_layer(&self) -> Option<&TileLayer> {
        let entry = self.layer_control.selected_base()?;
        self.layer_manager.get_layer_as::<TileLayer>(&entry.layer_id)
    }

    /// Fetches both feeds concurrently and fills each overlay as soon as its
    /// own feed resolves. Failures are recorded on the overlay, never returned.
    pub async fn load_overlays(&mut self, fetcher: &dyn FeedFetcher) {
        let requests: Vec<_> = OverlayKind::ALL
            .into_iter()
            .map(|kind| {
                let url = self.feed_url(kind).to_string();
                log::debug!("Requesting {} feed from {}", kind.feed_kind(), url);
                async move {
                    let result = fetcher.fetch(kind.feed_kind(), &url).await;
                    (kind, result)
                }
            })
            .collect();

        let mut pending = stream::iter(requests).buffer_unordered(OverlayKind::ALL.len());
        while let Some((kind, result)) = pending.next().await {
            self.apply_feed(kind, result);
        }
    }

    /// Applies one feed outcome to its overlay and leaves the other untouched
    pub fn apply_feed(&mut self, kind: OverlayKind, result: Result<GeoJson>) {
        let policy = self.config.radius_policy;
        let group = match self.layer_manager.get_layer_as_mut::<LayerGroup>(kind.layer_id()) {
            Some(group) => group,
            None => {
                log::error!("Overlay '{}' is missing from the layer manager", kind.layer_id());
                return;
            }
        };

        match result {
            Ok(geojson) => {
                let (layers, skipped) = match kind {
                    OverlayKind::Earthquakes => earthquake_layers(&geojson, policy),
                    OverlayKind::TectonicPlates => plate_layers(&geojson),
                };
                log::info!(
                    "{} overlay ready: {} rendered, {} skipped",
                    kind.name(),
                    layers.len(),
                    skipped
                );
                group.fill(layers, skipped);
            }
            Err(e) => {
                log::error!("Failed to load {} feed: {}", kind.feed_kind(), e);
                group.mark_unavailable(e.to_string());
            }
        }
    }

    /// Shows the named base layer and hides the others
    pub fn select_base_layer(&mut self, name: &str) -> Result<()> {
        let selected_id = self.layer_control.select_base(name)?.layer_id.clone();
        let base_ids: Vec<String> = self
            .layer_control
            .base_layers()
            .iter()
            .map(|entry| entry.layer_id.clone())
            .collect();
        for id in base_ids {
            let visible = id == selected_id;
            self.layer_manager
                .with_layer_mut(&id, |layer| layer.set_visible(visible));
        }
        log::debug!("Base layer switched to {}", name);
        Ok(())
    }

    pub fn set_overlay_visible(&mut self, name: &str, visible: bool) -> Result<()> {
        let layer_id = self
            .layer_control
            .overlay(name)
            .map(|entry| entry.layer_id.clone())
            .ok_or_else(|| MapError::Layer(format!("Unknown overlay: {}", name)))?;
        self.layer_manager
            .with_layer_mut(&layer_id, |layer| layer.set_visible(visible))
            .ok_or_else(|| MapError::Layer(format!("Overlay layer missing: {}", layer_id)))
    }

    /// Serializable description of everything a renderer needs to draw the
    /// map, layers in render order.
    pub fn scene(&self) -> Result<serde_json::Value> {
        let layers: Vec<serde_json::Value> = self
            .layer_manager
            .layers()
            .into_iter()
            .map(|layer| layer.options())
            .collect();

        Ok(serde_json::json!({
            "container": self.config.container_id,
            "view": {
                "center": self.config.center,
                "zoom": self.config.zoom,
            },
            "layers": layers,
            "layer_control": serde_json::to_value(&self.layer_control)?,
            "legend": {
                "position": self.legend.position,
                "entries": serde_json::to_value(self.legend.entries())?,
                "html": self.legend.to_html(),
            },
        }))
    }
}

/// One circle marker per valid earthquake, plus the number of features that
/// could not be drawn.
fn earthquake_layers(geojson: &GeoJson, policy: RadiusPolicy) -> (Vec<Box<dyn LayerTrait>>, usize) {
    let batch = EarthquakeBatch::from_geojson(geojson);
    let mut skipped = batch.skipped.len();
    let mut layers: Vec<Box<dyn LayerTrait>> = Vec::with_capacity(batch.features.len());

    for (index, quake) in batch.features.iter().enumerate() {
        let id = match &quake.id {
            Some(id) => format!("earthquake-{}", id),
            None => format!("earthquake-{}", index),
        };
        match CircleMarker::for_earthquake(id, quake, policy) {
            Ok(marker) => layers.push(Box::new(marker)),
            Err(e) => {
                log::warn!("Could not style earthquake at {:?}: {}", quake.position, e);
                skipped += 1;
            }
        }
    }

    (layers, skipped)
}

fn plate_layers(geojson: &GeoJson) -> (Vec<Box<dyn LayerTrait>>, usize) {
    let (boundaries, skipped) = plate_boundaries(geojson);
    if !skipped.is_empty() {
        log::warn!("Skipped {} plate boundary feature(s)", skipped.len());
    }
    let layers = boundaries
        .iter()
        .enumerate()
        .map(|(index, boundary)| {
            Box::new(Polyline::for_plate_boundary(format!("plate-{}", index), boundary))
                as Box<dyn LayerTrait>
        })
        .collect();
    (layers, skipped.len())
}
