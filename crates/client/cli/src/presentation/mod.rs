//! Rendering layer: terminal lifecycle, frame layout, and widgets.
pub mod terminal;
pub mod ui;
pub mod widgets;
