use crate::{
    core::geo::LatLngBounds,
    layers::base::{LayerProperties, LayerTrait, LayerType},
};
use serde::Serialize;

/// Load status of an overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OverlayState {
    /// Feed requested, nothing drawn yet.
    Loading,
    /// Feed loaded; `skipped` features failed validation and were not drawn.
    Ready { rendered: usize, skipped: usize },
    /// Feed could not be fetched or parsed; the overlay stays empty.
    Unavailable { reason: String },
}

impl OverlayState {
    pub fn is_ready(&self) -> bool {
        matches!(self, OverlayState::Ready { .. })
    }

    /// Text a renderer can show in place of the overlay's content
    pub fn status_message(&self) -> Option<String> {
        match self {
            OverlayState::Loading => Some("Loading…".to_string()),
            OverlayState::Ready { skipped: 0, .. } => None,
            OverlayState::Ready { skipped, .. } => {
                Some(format!("{} feature(s) could not be displayed", skipped))
            }
            OverlayState::Unavailable { .. } => Some("Data unavailable".to_string()),
        }
    }
}

/// Togglable container of layers, Leaflet's `LayerGroup`
pub struct LayerGroup {
    properties: LayerProperties,
    layers: Vec<Box<dyn LayerTrait>>,
    state: OverlayState,
}

impl LayerGroup {
    pub fn new(id: String, name: String) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerType::Group),
            layers: Vec::new(),
            state: OverlayState::Loading,
        }
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.properties.z_index = z_index;
        self
    }

    /// Child layers of a concrete type
    pub fn layers_of<T: 'static>(&self) -> impl Iterator<Item = &T> {
        self.layers.iter().filter_map(|l| l.as_any().downcast_ref::<T>())
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// Replace the group's content with a freshly loaded set of layers
    pub fn fill(&mut self, layers: Vec<Box<dyn LayerTrait>>, skipped: usize) {
        self.layers = layers;
        self.state = OverlayState::Ready {
            rendered: self.layers.len(),
            skipped,
        };
    }

    /// Empty the group and record why
    pub fn mark_unavailable(&mut self, reason: impl Into<String>) {
        self.layers.clear();
        self.state = OverlayState::Unavailable {
            reason: reason.into(),
        };
    }
}

impl LayerTrait for LayerGroup {
    crate::impl_layer_trait!(LayerGroup, properties);
    crate::impl_read_only_options!();

    fn options(&self) -> serde_json::Value {
        let mut json = self.properties.describe();
        json["state"] = serde_json::to_value(&self.state).unwrap_or_default();
        json["status_message"] = self.state.status_message().into();
        json["bounds"] = serde_json::to_value(self.bounds()).unwrap_or_default();
        json["layers"] = self.layers.iter().map(|l| l.options()).collect();
        json
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        self.layers
            .iter()
            .filter_map(|l| l.bounds())
            .reduce(|acc, b| acc.union(&b))
    }
}
