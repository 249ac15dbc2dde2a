use crate::style::depth::{DepthColor, DEPTH_BREAKPOINTS};
use serde::Serialize;

/// Separator between the two bounds of a closed legend range (en dash).
pub const RANGE_SEPARATOR: char = '\u{2013}';

/// One swatch of the depth legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: DepthColor,
    pub lower_bound: f64,
    /// `None` for the last, open-ended bucket.
    pub upper_bound: Option<f64>,
    pub label: String,
}

/// Legend rows for the depth breakpoint table, shallow first.
///
/// Labels read `"-10–10"`, `"10–30"`, ... and the deepest bucket `"90+"`.
pub fn legend_entries() -> Vec<LegendEntry> {
    DEPTH_BREAKPOINTS
        .iter()
        .enumerate()
        .map(|(i, breakpoint)| {
            let upper_bound = DEPTH_BREAKPOINTS.get(i + 1).map(|next| next.lower_bound);
            let label = match upper_bound {
                Some(upper) => format!("{}{}{}", breakpoint.lower_bound, RANGE_SEPARATOR, upper),
                None => format!("{}+", breakpoint.lower_bound),
            };
            LegendEntry {
                color: breakpoint.color,
                lower_bound: breakpoint.lower_bound,
                upper_bound,
                label,
            }
        })
        .collect()
}
