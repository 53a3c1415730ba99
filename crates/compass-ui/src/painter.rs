use compass_engine::coords::Vec2;
use compass_engine::paint::Color;
use compass_engine::scene::DrawList;
use compass_engine::text::{FontId, TextMeasure};

/// Canvas-style drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API and gives widgets
/// access to text metrics while they lay out labels.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    metrics: &'a dyn TextMeasure,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, metrics: &'a dyn TextMeasure) -> Self {
        Self { draw_list, metrics }
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Single-line advance width of `text`.
    #[inline]
    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> f32 {
        self.metrics.measure_width(text, font, size)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.draw_list.push_circle(center, radius, color);
    }

    /// Straight line from `from` to `to`.
    pub fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.draw_list.push_line(from, to, color, width);
    }

    /// Text with its baseline starting at `origin`.
    pub fn text(&mut self, text: impl Into<String>, font: FontId, size: f32, color: Color, origin: Vec2) {
        self.draw_list.push_text(text, font, size, color, origin);
    }

    // ── transforms ────────────────────────────────────────────────────────

    /// Begin a transform scope. Must be paired with [`restore`](Self::restore).
    pub fn save(&mut self) {
        self.draw_list.save();
    }

    /// End the most recent transform scope.
    pub fn restore(&mut self) {
        self.draw_list.restore();
    }

    /// Rotate subsequent drawing by `degrees` (clockwise on screen) about `pivot`.
    pub fn rotate(&mut self, degrees: f32, pivot: Vec2) {
        self.draw_list.rotate_about(degrees, pivot);
    }

    /// Offset subsequent drawing in the current frame.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.draw_list.translate(dx, dy);
    }
}
