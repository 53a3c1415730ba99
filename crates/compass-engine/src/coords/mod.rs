//! Coordinate and geometry types shared across the draw stream and UI.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Positive rotation angles turn clockwise on screen, matching canvas APIs
//! with a y-down origin.

mod transform;
mod vec2;

pub use transform::Transform;
pub use vec2::Vec2;
