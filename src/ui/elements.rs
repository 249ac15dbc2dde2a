use serde::{Deserialize, Serialize};

/// Map corner a control is anchored to, spelled the way Leaflet spells it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Default for Position {
    fn default() -> Self {
        Position::TopRight
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::TopLeft => write!(f, "topleft"),
            Position::TopRight => write!(f, "topright"),
            Position::BottomLeft => write!(f, "bottomleft"),
            Position::BottomRight => write!(f, "bottomright"),
        }
    }
}
