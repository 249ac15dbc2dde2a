use crate::{core::geo::LatLng, data::earthquake::EarthquakeFeature};
use serde::Serialize;

/// One labelled line of popup content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupField {
    pub label: String,
    pub value: String,
}

/// Informational popup bound to a marker, shown on click
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub id: String,
    pub position: LatLng,
    pub fields: Vec<PopupField>,
}

impl Popup {
    pub fn new(id: String, position: LatLng, fields: Vec<PopupField>) -> Self {
        Self {
            id,
            position,
            fields,
        }
    }

    /// Magnitude, place and depth, printed as the feed reported them
    pub fn for_earthquake(id: String, quake: &EarthquakeFeature) -> Self {
        let field = |label: &str, value: String| PopupField {
            label: label.to_string(),
            value,
        };
        Self::new(
            id,
            quake.position,
            vec![
                field("Magnitude", quake.magnitude.to_string()),
                field("Location", quake.place.clone()),
                field("Depth", format!("{} km", quake.depth)),
            ],
        )
    }

    /// Plain text, one `Label: value` line per field
    pub fn text(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("{}: {}", f.label, f.value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// HTML body with bold labels; values are escaped
    pub fn html(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("<strong>{}:</strong> {}", f.label, escape_html(&f.value)))
            .collect::<Vec<_>>()
            .join("<br>")
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quake(place: &str) -> EarthquakeFeature {
        EarthquakeFeature {
            id: None,
            magnitude: 4.6,
            depth: 35.0,
            place: place.to_string(),
            position: LatLng::new(-20.5, -178.4),
            time: None,
        }
    }

    #[test]
    fn test_earthquake_popup_text() {
        let popup = Popup::for_earthquake("p".to_string(), &quake("Fiji region"));
        assert_eq!(
            popup.text(),
            "Magnitude: 4.6\nLocation: Fiji region\nDepth: 35 km"
        );
    }

    #[test]
    fn test_earthquake_popup_html() {
        let popup = Popup::for_earthquake("p".to_string(), &quake("Fiji region"));
        assert_eq!(
            popup.html(),
            "<strong>Magnitude:</strong> 4.6<br><strong>Location:</strong> Fiji region<br><strong>Depth:</strong> 35 km"
        );
    }

    #[test]
    fn test_html_escapes_feed_text() {
        let popup = Popup::for_earthquake("p".to_string(), &quake("<b>M&M</b>"));
        assert!(popup.html().contains("&lt;b&gt;M&amp;M&lt;/b&gt;"));
        assert!(popup.text().contains("<b>M&M</b>"));
    }
}
