use crate::{ui::elements::Position, MapError, Result};
use serde::Serialize;

/// Placement and initial state of a control
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlConfig {
    pub visible: bool,
    pub position: Position,
    /// A collapsed control shows only an icon until hovered.
    pub collapsed: bool,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            visible: true,
            position: Position::TopRight,
            collapsed: false,
        }
    }
}

/// A named entry in the layer control, pointing at a layer id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlEntry {
    pub name: String,
    pub layer_id: String,
}

/// Leaflet-style layer switcher: exactly one base layer is selected at a
/// time, overlays toggle independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerControl {
    pub config: ControlConfig,
    base_layers: Vec<ControlEntry>,
    overlays: Vec<ControlEntry>,
    selected: usize,
}

impl LayerControl {
    pub fn new(config: ControlConfig) -> Self {
        Self {
            config,
            base_layers: Vec::new(),
            overlays: Vec::new(),
            selected: 0,
        }
    }

    pub fn add_base_layer(&mut self, name: impl Into<String>, layer_id: impl Into<String>) {
        self.base_layers.push(ControlEntry {
            name: name.into(),
            layer_id: layer_id.into(),
        });
    }

    pub fn add_overlay(&mut self, name: impl Into<String>, layer_id: impl Into<String>) {
        self.overlays.push(ControlEntry {
            name: name.into(),
            layer_id: layer_id.into(),
        });
    }

    pub fn base_layers(&self) -> &[ControlEntry] {
        &self.base_layers
    }

    pub fn overlays(&self) -> &[ControlEntry] {
        &self.overlays
    }

    pub fn selected_base(&self) -> Option<&ControlEntry> {
        self.base_layers.get(self.selected)
    }

    /// Select a base layer by display name, returning its entry
    pub fn select_base(&mut self, name: &str) -> Result<&ControlEntry> {
        let index = self
            .base_layers
            .iter()
            .position(|entry| entry.name == name)
            .ok_or_else(|| MapError::Layer(format!("Unknown base layer: {}", name)))?;
        self.selected = index;
        Ok(&self.base_layers[index])
    }

    pub fn overlay(&self, name: &str) -> Option<&ControlEntry> {
        self.overlays.iter().find(|entry| entry.name == name)
    }
}

impl Default for LayerControl {
    fn default() -> Self {
        Self::new(ControlConfig::default())
    }
}
