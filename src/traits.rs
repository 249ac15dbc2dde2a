//! Shared trait abstractions for common patterns
//!
//! Every layer the map composes (tile layers, overlay groups, circle markers,
//! polylines) implements [`LayerOperations`], which is re-exported as
//! `LayerTrait` from `layers::base`.

use crate::{core::geo::LatLngBounds, layers::base::LayerType, Result};

/// Trait for layer-like objects
pub trait LayerOperations: Send + Sync {
    /// Get layer ID
    fn id(&self) -> &str;

    /// Get layer name
    fn name(&self) -> &str;

    /// Get layer type
    fn layer_type(&self) -> LayerType;

    /// Check if layer is visible
    fn is_visible(&self) -> bool;

    /// Set layer visibility
    fn set_visible(&mut self, visible: bool);

    /// Get layer opacity (0.0 to 1.0)
    fn opacity(&self) -> f32;

    /// Set layer opacity
    fn set_opacity(&mut self, opacity: f32);

    /// Get layer z-index for ordering
    fn z_index(&self) -> i32;

    /// Set layer z-index
    fn set_z_index(&mut self, z_index: i32);

    /// Get layer bounds if applicable
    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }

    /// Serializable description of the layer, consumed by renderers
    fn options(&self) -> serde_json::Value;

    /// Set layer options
    fn set_options(&mut self, options: serde_json::Value) -> Result<()>;

    /// Dynamic casting support
    fn as_any(&self) -> &dyn std::any::Any;
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}

/// Decide whether another attempt is allowed and how long to wait before it.
///
/// `attempt` counts failures so far, starting at 1 after the first failure.
pub fn retry_delay_with_backoff(
    attempt: u32,
    max_retries: u32,
    retry_delay_ms: u64,
    exponential_backoff: bool,
) -> Option<std::time::Duration> {
    if attempt > max_retries {
        return None;
    }

    let delay_multiplier = if exponential_backoff {
        2_u64.saturating_pow(attempt.saturating_sub(1))
    } else {
        1
    };
    Some(std::time::Duration::from_millis(
        retry_delay_ms.saturating_mul(delay_multiplier),
    ))
}
