use compass_engine::coords::Vec2;

use crate::measure::MeasureSpec;
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// Measure-then-paint contract a host drives once per frame.
///
/// # Implementing a custom widget
///
/// ```rust,ignore
/// use compass_ui::prelude::*;
///
/// pub struct Dot { color: Color }
///
/// impl Widget for Dot {
///     fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Vec2 {
///         resolve_square(width, height)
///     }
///     fn paint(&self, painter: &mut Painter, size: Vec2) {
///         painter.fill_circle(size * 0.5, size.x * 0.5, self.color);
///     }
/// }
/// ```
pub trait Widget {
    /// Compute the size this widget takes given the host's proposals.
    ///
    /// Must be deterministic: the host may call `measure` more than once.
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Vec2;

    /// Draw into `painter` within a `size` box anchored at the origin.
    ///
    /// `size` is normally the value returned by [`measure`](Self::measure).
    fn paint(&self, painter: &mut Painter, size: Vec2);
}
