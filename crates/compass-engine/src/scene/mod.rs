//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in recording order
//! - track the canvas-style transform stack (`save` / `restore` / `rotate` / `translate`)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use shapes::circle::CircleCmd;
pub use shapes::line::LineCmd;
pub use shapes::text::TextCmd;
