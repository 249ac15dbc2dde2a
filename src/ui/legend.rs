use crate::{
    style::legend::{legend_entries, LegendEntry, RANGE_SEPARATOR},
    ui::elements::Position,
};
use serde::Serialize;

/// Depth color key anchored to a map corner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: Position,
    pub visible: bool,
    entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new() -> Self {
        Self {
            position: Position::BottomRight,
            visible: true,
            entries: legend_entries(),
        }
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// One swatch and label per line, e.g.
    /// `<i style="background: #98ee00"></i> -10&ndash;10<br>`
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for entry in &self.entries {
            html.push_str(&format!(
                "<i style=\"background: {}\"></i> {}<br>",
                entry.color,
                entry.label.replace(RANGE_SEPARATOR, "&ndash;")
            ));
        }
        html
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::new()
    }
}
