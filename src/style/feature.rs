use crate::{
    data::earthquake::EarthquakeFeature,
    style::{
        depth::{color_for_depth, DepthColor},
        magnitude::{radius_for_magnitude, RadiusPolicy},
    },
    Result,
};
use serde::Serialize;

/// Outline color shared by every earthquake marker.
pub const OUTLINE_COLOR: &str = "#000000";

/// Outline width shared by every earthquake marker.
pub const OUTLINE_WEIGHT: f64 = 0.5;

/// Path options for one earthquake circle marker.
///
/// Field names serialize the way Leaflet spells its path options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualStyle {
    pub fill_color: DepthColor,
    pub radius: f64,
    pub stroke: bool,
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl VisualStyle {
    fn new(fill_color: DepthColor, radius: f64) -> Self {
        Self {
            fill_color,
            radius,
            stroke: true,
            color: OUTLINE_COLOR,
            weight: OUTLINE_WEIGHT,
            opacity: 1.0,
            fill_opacity: 1.0,
        }
    }
}

/// Style an earthquake with the default [`RadiusPolicy`].
pub fn style_feature(feature: &EarthquakeFeature) -> Result<VisualStyle> {
    style_feature_with(feature, RadiusPolicy::default())
}

/// Style an earthquake: fill color from depth, radius from magnitude.
pub fn style_feature_with(feature: &EarthquakeFeature, policy: RadiusPolicy) -> Result<VisualStyle> {
    let fill_color = color_for_depth(feature.depth)?;
    let radius = radius_for_magnitude(feature.magnitude, policy)?;
    Ok(VisualStyle::new(fill_color, radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    fn quake(magnitude: f64, depth: f64) -> EarthquakeFeature {
        EarthquakeFeature {
            id: Some("us7000test".to_string()),
            magnitude,
            depth,
            place: "10 km SSW of Volcano, Hawaii".to_string(),
            position: LatLng::new(19.33, -155.25),
            time: None,
        }
    }

    #[test]
    fn test_deep_strong_quake() {
        let style = style_feature(&quake(5.2, 95.0)).unwrap();
        assert_eq!(style.fill_color.hex(), "#ea2c2c");
        assert!((style.radius - 20.8).abs() < 1e-12);
    }

    #[test]
    fn test_boundary_depth_zero_magnitude() {
        let style = style_feature(&quake(0.0, 10.0)).unwrap();
        assert_eq!(style.fill_color.hex(), "#98ee00");
        assert_eq!(style.radius, 1.0);
    }

    #[test]
    fn test_fixed_outline() {
        let style = style_feature(&quake(3.1, 42.0)).unwrap();
        assert!(style.stroke);
        assert_eq!(style.color, "#000000");
        assert_eq!(style.weight, 0.5);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.fill_opacity, 1.0);
    }

    #[test]
    fn test_styling_is_idempotent() {
        let feature = quake(4.4, 63.0);
        assert_eq!(
            style_feature(&feature).unwrap(),
            style_feature(&feature).unwrap()
        );
    }

    #[test]
    fn test_radius_policy_is_honored() {
        let feature = quake(-0.5, 2.0);
        assert_eq!(style_feature(&feature).unwrap().radius, 1.0);
        assert_eq!(
            style_feature_with(&feature, RadiusPolicy::Legacy).unwrap().radius,
            -2.0
        );
    }

    #[test]
    fn test_leaflet_option_names() {
        let json = serde_json::to_value(style_feature(&quake(2.0, 75.0)).unwrap()).unwrap();
        assert_eq!(json["fillColor"], "#ea822c");
        assert_eq!(json["fillOpacity"], 1.0);
        assert_eq!(json["radius"], 8.0);
        assert_eq!(json["weight"], 0.5);
    }
}
