use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Straight line segment payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
    /// Stroke width in logical pixels.
    pub width: f32,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, color: Color, width: f32) -> Self {
        Self { from, to, color, width }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

impl DrawList {
    /// Records a line segment under the current transform.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.push(DrawCmd::Line(LineCmd::new(from, to, color, width)));
    }
}
