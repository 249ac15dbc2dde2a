//! Visual encoding of earthquake features
//!
//! Depth picks one of six colors, magnitude sets the marker radius, and the
//! legend is derived from the same breakpoint table the colors come from.

pub mod depth;
pub mod feature;
pub mod legend;
pub mod magnitude;

pub use depth::{color_for_depth, DepthBreakpoint, DepthColor, DEPTH_BREAKPOINTS};
pub use feature::{style_feature, style_feature_with, VisualStyle};
pub use legend::{legend_entries, LegendEntry};
pub use magnitude::{radius_for_magnitude, RadiusPolicy, FLOOR_RADIUS, RADIUS_SCALE};
