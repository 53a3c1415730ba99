use crate::coords::Transform;
use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach the surfaces under `render::*` to draw it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Line(LineCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Returns the command with every anchor point mapped through `t`.
    ///
    /// Lengths (radius, stroke width, font size) are left untouched; the dial
    /// only ever applies rigid transforms.
    #[must_use]
    pub fn mapped(&self, t: Transform) -> DrawCmd {
        match self {
            DrawCmd::Circle(c) => DrawCmd::Circle(CircleCmd { center: t.apply(c.center), ..c.clone() }),
            DrawCmd::Line(l) => DrawCmd::Line(LineCmd { from: t.apply(l.from), to: t.apply(l.to), ..l.clone() }),
            DrawCmd::Text(x) => DrawCmd::Text(TextCmd { origin: t.apply(x.origin), ..x.clone() }),
        }
    }
}
