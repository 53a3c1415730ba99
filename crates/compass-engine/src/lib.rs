//! Compass engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the compass widget:
//! geometry and transforms, colors, the recorded draw stream, text metrics
//! and an SVG rendering surface.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
