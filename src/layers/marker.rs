use crate::{
    core::geo::{LatLng, LatLngBounds},
    data::earthquake::EarthquakeFeature,
    layers::base::{LayerProperties, LayerTrait, LayerType},
    style::{feature::style_feature_with, magnitude::RadiusPolicy, VisualStyle},
    ui::popup::Popup,
    Result,
};

/// A circle marker sized in screen pixels, Leaflet's `circleMarker`
pub struct CircleMarker {
    properties: LayerProperties,
    position: LatLng,
    style: VisualStyle,
    popup: Option<Popup>,
}

impl CircleMarker {
    pub fn new(id: String, position: LatLng, style: VisualStyle) -> Self {
        let properties = LayerProperties::new(id, "Circle Marker".to_string(), LayerType::Marker);
        Self {
            properties,
            position,
            style,
            popup: None,
        }
    }

    /// Styled marker with an attached popup for one earthquake
    pub fn for_earthquake(
        id: String,
        quake: &EarthquakeFeature,
        policy: RadiusPolicy,
    ) -> Result<Self> {
        let style = style_feature_with(quake, policy)?;
        let popup = Popup::for_earthquake(format!("{}-popup", id), quake);
        Ok(Self::new(id, quake.position, style).with_popup(popup))
    }

    pub fn with_popup(mut self, popup: Popup) -> Self {
        self.popup = Some(popup);
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn style(&self) -> &VisualStyle {
        &self.style
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }
}

impl LayerTrait for CircleMarker {
    crate::impl_layer_trait!(CircleMarker, properties);
    crate::impl_read_only_options!();

    fn options(&self) -> serde_json::Value {
        let mut json = self.properties.describe();
        json["position"] = serde_json::json!(self.position);
        json["style"] = serde_json::json!(self.style);
        json["popup"] = self.popup.as_ref().map(|p| p.html()).into();
        json
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        Some(LatLngBounds::new(self.position, self.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quake() -> EarthquakeFeature {
        EarthquakeFeature {
            id: Some("nc75000001".to_string()),
            magnitude: 3.4,
            depth: 8.1,
            place: "5 km N of The Geysers, CA".to_string(),
            position: LatLng::new(38.82, -122.80),
            time: None,
        }
    }

    #[test]
    fn test_marker_for_earthquake() {
        let marker = CircleMarker::for_earthquake(
            "nc75000001".to_string(),
            &quake(),
            RadiusPolicy::Clamped,
        )
        .unwrap();

        assert_eq!(marker.layer_type(), LayerType::Marker);
        assert_eq!(marker.position(), LatLng::new(38.82, -122.80));
        assert_eq!(marker.style().fill_color.hex(), "#98ee00");
        assert!((marker.style().radius - 13.6).abs() < 1e-12);
        assert!(marker.popup().unwrap().text().contains("5 km N of The Geysers, CA"));
    }

    #[test]
    fn test_options_are_read_only() {
        let mut marker = CircleMarker::for_earthquake(
            "m".to_string(),
            &quake(),
            RadiusPolicy::Clamped,
        )
        .unwrap();

        let options = marker.options();
        assert_eq!(options["style"]["fillColor"], "#98ee00");
        assert_eq!(options["position"]["lat"], 38.82);
        assert!(marker.set_options(serde_json::json!({})).is_err());
    }

    #[test]
    fn test_bounds_is_the_position() {
        let marker = CircleMarker::for_earthquake("m".to_string(), &quake(), RadiusPolicy::Clamped)
            .unwrap();
        let bounds = marker.bounds().unwrap();
        assert_eq!(bounds.south_west, bounds.north_east);
    }
}
