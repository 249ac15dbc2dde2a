use crate::{
    layers::base::{LayerTrait, LayerType},
    prelude::HashMap,
    MapError, Result,
};

/// Owns the map's layers and keeps them in z-index order
pub struct LayerManager {
    /// All layers indexed by ID
    layers: HashMap<String, Box<dyn LayerTrait>>,
    /// Ordered list of layer IDs for drawing (sorted by z-index)
    render_order: Vec<String>,
}

impl LayerManager {
    pub fn new() -> Self {
        Self {
            layers: HashMap::default(),
            render_order: Vec::new(),
        }
    }

    /// Adds a layer; ids must be unique
    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        let layer_id = layer.id().to_string();
        if self.layers.contains_key(&layer_id) {
            return Err(MapError::Layer(format!("duplicate layer id '{}'", layer_id)));
        }
        let z_index = layer.z_index();

        // Insert in sorted order by z-index
        let insert_pos = self
            .render_order
            .iter()
            .position(|id| {
                self.layers
                    .get(id)
                    .map(|l| l.z_index() > z_index)
                    .unwrap_or(false)
            })
            .unwrap_or(self.render_order.len());

        self.layers.insert(layer_id.clone(), layer);
        self.render_order.insert(insert_pos, layer_id);
        Ok(())
    }

    pub fn get_layer(&self, layer_id: &str) -> Option<&dyn LayerTrait> {
        self.layers.get(layer_id).map(|l| l.as_ref())
    }

    /// Typed access to a layer, `None` if missing or of another type
    pub fn get_layer_as<T: 'static>(&self, layer_id: &str) -> Option<&T> {
        self.layers
            .get(layer_id)
            .and_then(|l| l.as_any().downcast_ref::<T>())
    }

    pub fn get_layer_as_mut<T: 'static>(&mut self, layer_id: &str) -> Option<&mut T> {
        self.layers
            .get_mut(layer_id)
            .and_then(|l| l.as_any_mut().downcast_mut::<T>())
    }

    /// Applies a function to a specific layer mutably
    pub fn with_layer_mut<F, R>(&mut self, layer_id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut dyn LayerTrait) -> R,
    {
        self.layers.get_mut(layer_id).map(|layer| f(layer.as_mut()))
    }

    /// Gets all layers in render order
    pub fn layers(&self) -> Vec<&dyn LayerTrait> {
        self.render_order
            .iter()
            .filter_map(|id| self.layers.get(id).map(|l| l.as_ref()))
            .collect()
    }

    /// Layers of one type, in render order
    pub fn layers_of_type(&self, layer_type: LayerType) -> Vec<&dyn LayerTrait> {
        self.layers()
            .into_iter()
            .filter(|l| l.layer_type() == layer_type)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{group::LayerGroup, tile::TileLayer};

    fn manager() -> LayerManager {
        let mut manager = LayerManager::new();
        manager
            .add_layer(Box::new(
                LayerGroup::new("quakes".to_string(), "Earthquakes".to_string()).with_z_index(20),
            ))
            .unwrap();
        manager
            .add_layer(Box::new(TileLayer::openstreetmap(
                "outdoors".to_string(),
                "Outdoors".to_string(),
            )))
            .unwrap();
        manager
            .add_layer(Box::new(
                LayerGroup::new("plates".to_string(), "Tectonic Plates".to_string())
                    .with_z_index(10),
            ))
            .unwrap();
        manager
    }

    #[test]
    fn test_render_order_follows_z_index() {
        let manager = manager();
        let ids: Vec<&str> = manager.layers().iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["outdoors", "plates", "quakes"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut manager = manager();
        let result = manager.add_layer(Box::new(TileLayer::openstreetmap(
            "outdoors".to_string(),
            "Again".to_string(),
        )));
        assert!(result.is_err());
        assert_eq!(manager.len(), 3);
    }

    #[test]
    fn test_typed_access_and_filtering() {
        let mut manager = manager();
        assert!(manager.get_layer_as::<LayerGroup>("plates").is_some());
        assert!(manager.get_layer_as::<TileLayer>("plates").is_none());
        assert_eq!(manager.layers_of_type(LayerType::Group).len(), 2);

        manager
            .get_layer_as_mut::<LayerGroup>("quakes")
            .unwrap()
            .mark_unavailable("offline");
        assert!(!manager
            .get_layer_as::<LayerGroup>("quakes")
            .unwrap()
            .state()
            .is_ready());
    }

    #[test]
    fn test_with_layer_mut() {
        let mut manager = manager();
        assert_eq!(manager.with_layer_mut("outdoors", |l| l.set_visible(false)), Some(()));
        assert!(!manager.get_layer("outdoors").unwrap().is_visible());
        assert!(manager.with_layer_mut("missing", |l| l.set_visible(false)).is_none());
    }
}
