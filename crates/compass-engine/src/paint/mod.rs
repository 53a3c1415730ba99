//! Paint model shared between the UI layer and rendering surfaces.
//!
//! Only solid colors are needed by the dial; geometry types remain in `coords`.

pub mod color;

pub use color::Color;
