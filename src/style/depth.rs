use crate::{MapError, Result};
use serde::{Serialize, Serializer};

/// The six marker fill colors, ordered from shallow to deep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthColor {
    Lime,
    Chartreuse,
    Yellow,
    Amber,
    Orange,
    Red,
}

impl DepthColor {
    pub const ALL: [DepthColor; 6] = [
        DepthColor::Lime,
        DepthColor::Chartreuse,
        DepthColor::Yellow,
        DepthColor::Amber,
        DepthColor::Orange,
        DepthColor::Red,
    ];

    pub fn hex(&self) -> &'static str {
        match self {
            DepthColor::Lime => "#98ee00",
            DepthColor::Chartreuse => "#d4ee00",
            DepthColor::Yellow => "#eecc00",
            DepthColor::Amber => "#ee9c00",
            DepthColor::Orange => "#ea822c",
            DepthColor::Red => "#ea2c2c",
        }
    }
}

impl std::fmt::Display for DepthColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hex())
    }
}

impl Serialize for DepthColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

/// One row of the depth table: depths strictly above `lower_bound` (and not
/// above the next row's bound) get `color`. The first row also catches
/// everything at or below the second row's bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBreakpoint {
    pub lower_bound: f64,
    pub color: DepthColor,
}

/// Depth breakpoints in kilometers, ascending.
pub const DEPTH_BREAKPOINTS: [DepthBreakpoint; 6] = [
    DepthBreakpoint { lower_bound: -10.0, color: DepthColor::Lime },
    DepthBreakpoint { lower_bound: 10.0, color: DepthColor::Chartreuse },
    DepthBreakpoint { lower_bound: 30.0, color: DepthColor::Yellow },
    DepthBreakpoint { lower_bound: 50.0, color: DepthColor::Amber },
    DepthBreakpoint { lower_bound: 70.0, color: DepthColor::Orange },
    DepthBreakpoint { lower_bound: 90.0, color: DepthColor::Red },
];

/// Color for a hypocenter depth in kilometers.
///
/// Thresholds are strict: a depth exactly on a breakpoint belongs to the
/// bracket below it, so 90 km is orange and 10 km is lime. Anything at or
/// below 10 km, negative depths included, is lime. NaN is rejected.
pub fn color_for_depth(depth: f64) -> Result<DepthColor> {
    if depth.is_nan() {
        return Err(MapError::InvalidValue("depth is NaN".to_string()));
    }

    let color = DEPTH_BREAKPOINTS[1..]
        .iter()
        .rev()
        .find(|breakpoint| depth > breakpoint.lower_bound)
        .map(|breakpoint| breakpoint.color)
        .unwrap_or(DEPTH_BREAKPOINTS[0].color);

    Ok(color)
}
