//! Macros to reduce boilerplate in layer implementations

/// Implements the property-backed `LayerTrait` accessors:
/// id, name, layer type, z-index, opacity, visibility and `as_any`.
///
/// Usage:
/// ```ignore
/// impl LayerTrait for CircleMarker {
///     quakemap::impl_layer_trait!(CircleMarker, properties);
///     // options(), set_options() ...
/// }
/// ```
#[macro_export]
macro_rules! impl_layer_trait {
    ($layer_type:ty, $properties_field:ident) => {
        fn id(&self) -> &str {
            &self.$properties_field.id
        }

        fn name(&self) -> &str {
            &self.$properties_field.name
        }

        fn layer_type(&self) -> $crate::layers::base::LayerType {
            self.$properties_field.layer_type
        }

        fn z_index(&self) -> i32 {
            self.$properties_field.z_index
        }

        fn set_z_index(&mut self, z_index: i32) {
            self.$properties_field.z_index = z_index;
        }

        fn opacity(&self) -> f32 {
            self.$properties_field.opacity
        }

        fn set_opacity(&mut self, opacity: f32) {
            self.$properties_field.opacity = opacity.clamp(0.0, 1.0);
        }

        fn is_visible(&self) -> bool {
            self.$properties_field.visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.$properties_field.visible = visible;
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
}

/// Rejects option updates for layers whose options are derived, not stored
#[macro_export]
macro_rules! impl_read_only_options {
    () => {
        fn set_options(&mut self, _options: serde_json::Value) -> $crate::Result<()> {
            Err($crate::MapError::Layer(format!(
                "layer '{}' options are derived and cannot be set",
                self.id()
            )))
        }
    };
}
