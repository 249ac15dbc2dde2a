use crate::{MapError, Result};

/// Marker radius for a magnitude-zero event, and the clamped minimum.
pub const FLOOR_RADIUS: f64 = 1.0;

/// Radius units per unit of magnitude.
pub const RADIUS_SCALE: f64 = 4.0;

/// How negative magnitudes are sized.
///
/// The USGS feed does publish small negative magnitudes for micro-events.
/// Scaling them linearly yields a zero or negative radius, which renders as
/// nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadiusPolicy {
    /// Negative magnitudes get [`FLOOR_RADIUS`], so every marker is visible.
    #[default]
    Clamped,
    /// `magnitude * 4` for every non-zero magnitude, negative results included.
    Legacy,
}

/// Marker radius for a magnitude.
///
/// Zero maps to [`FLOOR_RADIUS`]; positive magnitudes scale linearly by
/// [`RADIUS_SCALE`] under either policy.
pub fn radius_for_magnitude(magnitude: f64, policy: RadiusPolicy) -> Result<f64> {
    if magnitude.is_nan() {
        return Err(MapError::InvalidValue("magnitude is NaN".to_string()));
    }

    if magnitude == 0.0 {
        return Ok(FLOOR_RADIUS);
    }

    match policy {
        RadiusPolicy::Clamped if magnitude < 0.0 => Ok(FLOOR_RADIUS),
        _ => Ok(magnitude * RADIUS_SCALE),
    }
}
