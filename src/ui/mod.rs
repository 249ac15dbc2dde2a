pub mod controls;
pub mod elements;
pub mod legend;
pub mod popup;

pub use controls::LayerControl;
pub use elements::Position;
pub use legend::Legend;
pub use popup::Popup;
