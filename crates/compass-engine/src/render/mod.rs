//! Rendering surfaces that consume a recorded [`DrawList`](crate::scene::DrawList).

pub mod svg;

pub use svg::SvgSurface;
