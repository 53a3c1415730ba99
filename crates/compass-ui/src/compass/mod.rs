//! The compass dial widget.
//!
//! [`CompassView`] owns the current bearing and an immutable style, reports
//! the effects of every bearing change as a [`BearingChange`], and records a
//! full dial into a [`DrawList`] on request. [`render`] does the same for
//! hosts that keep the bearing themselves.

mod dial;

use std::fmt;

use compass_engine::coords::Vec2;
use compass_engine::scene::DrawList;
use compass_engine::text::TextMeasure;

use crate::accessibility::{bearing_text, AccessibilityEvent, AccessibilityObserver};
use crate::measure::{resolve_square, MeasureSpec};
use crate::painter::Painter;
use crate::style::CompassStyle;
use crate::widget::Widget;

pub use dial::{DialGeometry, TickLabel, ARROW_HALF_WIDTH, TICK_COUNT, TICK_LENGTH, TICK_STEP_DEGREES};

// ── errors ────────────────────────────────────────────────────────────────

/// Error returned by [`CompassView::set_bearing`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BearingError {
    /// NaN or infinite bearing; the stored bearing is left unchanged.
    NonFinite(f32),
}

impl fmt::Display for BearingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BearingError::NonFinite(v) => write!(f, "bearing must be finite, got {v}"),
        }
    }
}

impl std::error::Error for BearingError {}

// ── BearingChange ─────────────────────────────────────────────────────────

/// Effects of a successful [`CompassView::set_bearing`].
#[derive(Debug, Clone, PartialEq)]
pub struct BearingChange {
    /// The host should repaint. Always set.
    pub redraw: bool,
    /// Present only when the widget was visible at the time of the change.
    pub notification: Option<AccessibilityEvent>,
}

// ── CompassView ───────────────────────────────────────────────────────────

/// Compass dial with a live bearing.
///
/// # Example
/// ```rust,ignore
/// let metrics = MonospaceMetrics::default();
/// let mut view = CompassView::new(CompassStyle::default(), &metrics);
/// let change = view.set_bearing(90.0, true)?;
/// if change.redraw {
///     let list = view.render(MeasureSpec::Exactly(300.0), MeasureSpec::Exactly(300.0), &metrics);
///     // hand `list` to a surface
/// }
/// ```
pub struct CompassView {
    bearing: f32,
    style: CompassStyle,
    /// Fixed at construction; reused for every label offset.
    text_height: u32,
    observers: Vec<AccessibilityObserver>,
}

impl CompassView {
    /// Builds a view facing north. `metrics` is used once to fix the text height.
    pub fn new(style: CompassStyle, metrics: &dyn TextMeasure) -> Self {
        let text_height = style.text_height(metrics);
        log::debug!("compass view created (text height {text_height}px)");
        Self { bearing: 0.0, style, text_height, observers: Vec::new() }
    }

    #[inline]
    pub fn bearing(&self) -> f32 {
        self.bearing
    }

    #[inline]
    pub fn style(&self) -> &CompassStyle {
        &self.style
    }

    #[inline]
    pub fn text_height(&self) -> u32 {
        self.text_height
    }

    /// Stores a new bearing in degrees.
    ///
    /// Any finite value is accepted as-is; the dial rotation wraps on its own.
    /// A redraw is always requested. The accessibility notification is built
    /// (and observers are called) only when `visible` is true.
    pub fn set_bearing(&mut self, bearing: f32, visible: bool) -> Result<BearingChange, BearingError> {
        if !bearing.is_finite() {
            log::warn!("rejected non-finite bearing {bearing}");
            return Err(BearingError::NonFinite(bearing));
        }

        self.bearing = bearing;
        log::trace!("bearing set to {bearing} (visible: {visible})");

        let notification = visible.then(|| AccessibilityEvent::TextChanged { text: bearing_text(bearing) });
        if let Some(event) = &notification {
            for observer in &mut self.observers {
                observer(event);
            }
        }

        Ok(BearingChange { redraw: true, notification })
    }

    /// Registers a callback for accessibility notifications.
    pub fn on_accessibility(&mut self, observer: impl FnMut(&AccessibilityEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Text announced for the current bearing, or `None` when hidden.
    pub fn accessibility_text(&self, visible: bool) -> Option<String> {
        visible.then(|| bearing_text(self.bearing))
    }

    /// Measures and records one render pass into a fresh list.
    pub fn render(&self, width: MeasureSpec, height: MeasureSpec, metrics: &dyn TextMeasure) -> DrawList {
        let mut list = DrawList::new();
        self.render_into(&mut list, width, height, metrics);
        list
    }

    /// Clears `list`, then records one render pass into it. Returns the resolved size.
    pub fn render_into(
        &self,
        list: &mut DrawList,
        width: MeasureSpec,
        height: MeasureSpec,
        metrics: &dyn TextMeasure,
    ) -> Vec2 {
        list.clear();
        let size = self.measure(width, height);
        let mut painter = Painter::new(list, metrics);
        self.paint(&mut painter, size);
        size
    }
}

impl Widget for CompassView {
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Vec2 {
        resolve_square(width, height)
    }

    fn paint(&self, painter: &mut Painter, size: Vec2) {
        log::trace!("painting dial {}x{} at bearing {}", size.x, size.y, self.bearing);
        dial::paint_dial(painter, size.x.min(size.y), self.bearing, &self.style, self.text_height);
    }
}

impl fmt::Debug for CompassView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompassView")
            .field("bearing", &self.bearing)
            .field("style", &self.style)
            .field("text_height", &self.text_height)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// ── free function ─────────────────────────────────────────────────────────

/// One render pass without a retained view.
///
/// The size proposals are squared with [`resolve_square`] before drawing and
/// the text height is derived from `metrics` for this call. Any `f32` bearing
/// is drawn; non-finite input yields non-finite geometry and a warning.
pub fn render(
    bearing: f32,
    width: MeasureSpec,
    height: MeasureSpec,
    style: &CompassStyle,
    metrics: &dyn TextMeasure,
) -> DrawList {
    let side = resolve_square(width, height).x;
    let mut list = DrawList::new();
    let mut painter = Painter::new(&mut list, metrics);
    dial::paint_dial(&mut painter, side, bearing, style, style.text_height(metrics));
    list
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use compass_engine::text::MonospaceMetrics;

    use super::*;

    fn view() -> CompassView {
        CompassView::new(CompassStyle::default(), &MonospaceMetrics::new(0.5))
    }

    // ── set_bearing ───────────────────────────────────────────────────────

    #[test]
    fn visible_change_redraws_and_notifies() {
        let mut v = view();
        let change = v.set_bearing(90.0, true).unwrap();
        assert!(change.redraw);
        assert_eq!(change.notification, Some(AccessibilityEvent::TextChanged { text: "90".into() }));
        assert_eq!(v.bearing(), 90.0);
    }

    #[test]
    fn hidden_change_redraws_without_notification() {
        let mut v = view();
        let change = v.set_bearing(45.0, false).unwrap();
        assert!(change.redraw);
        assert_eq!(change.notification, None);
        assert_eq!(v.bearing(), 45.0);
    }

    #[test]
    fn out_of_range_bearings_are_stored_verbatim() {
        let mut v = view();
        for b in [-90.0, 360.0, 725.5, -1080.0] {
            v.set_bearing(b, false).unwrap();
            assert_eq!(v.bearing(), b);
        }
    }

    #[test]
    fn non_finite_bearing_is_rejected_and_keeps_old_value() {
        let mut v = view();
        v.set_bearing(10.0, true).unwrap();
        assert!(matches!(v.set_bearing(f32::NAN, true), Err(BearingError::NonFinite(_))));
        assert_eq!(v.set_bearing(f32::INFINITY, true), Err(BearingError::NonFinite(f32::INFINITY)));
        assert_eq!(v.bearing(), 10.0);
    }

    #[test]
    fn observers_only_hear_visible_changes() {
        let heard = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&heard);
        let mut v = view();
        v.on_accessibility(move |e| sink.borrow_mut().push(e.text().to_string()));

        v.set_bearing(1.0, true).unwrap();
        v.set_bearing(2.0, false).unwrap();
        v.set_bearing(-3.5, true).unwrap();

        assert_eq!(*heard.borrow(), ["1", "-3.5"]);
    }

    // ── accessibility_text ────────────────────────────────────────────────

    #[test]
    fn accessibility_text_depends_on_visibility() {
        let mut v = view();
        v.set_bearing(12.5, false).unwrap();
        assert_eq!(v.accessibility_text(true).as_deref(), Some("12.5"));
        assert_eq!(v.accessibility_text(false), None);
    }

    // ── rendering ─────────────────────────────────────────────────────────

    #[test]
    fn render_into_reuses_list_and_reports_size() {
        let v = view();
        let metrics = MonospaceMetrics::new(0.5);
        let mut list = DrawList::new();
        let first = v.render_into(&mut list, MeasureSpec::Exactly(300.0), MeasureSpec::Exactly(150.0), &metrics);
        let count = list.len();
        let second = v.render_into(&mut list, MeasureSpec::Exactly(300.0), MeasureSpec::Exactly(150.0), &metrics);

        assert_eq!(first, Vec2::splat(150.0));
        assert_eq!(second, first);
        assert_eq!(list.len(), count);
        assert_eq!(list.save_depth(), 0);
    }

    #[test]
    fn free_render_matches_view_render() {
        let metrics = MonospaceMetrics::new(0.5);
        let mut v = view();
        v.set_bearing(33.0, false).unwrap();
        let from_view = v.render(MeasureSpec::Unspecified, MeasureSpec::Unspecified, &metrics);
        let from_fn = render(33.0, MeasureSpec::Unspecified, MeasureSpec::Unspecified, v.style(), &metrics);
        assert_eq!(from_view.items(), from_fn.items());
    }

    #[test]
    fn text_height_is_fixed_at_construction() {
        let v = view();
        // "yY" at 12px, 0.5 advance.
        assert_eq!(v.text_height(), 12);
    }

    #[test]
    fn text_height_from_a_loaded_font() {
        use compass_engine::text::FontSystem;

        let Some(bytes) = [
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        ]
        .iter()
        .find_map(|p| std::fs::read(p).ok()) else {
            eprintln!("DejaVu Sans not installed; skipping");
            return;
        };
        let mut fonts = FontSystem::new();
        let id = fonts.load_font(&bytes).unwrap();

        let v = CompassView::new(CompassStyle::default().font(id), &fonts);
        // "yY" advances sum to 14.43 at 12px.
        assert_eq!(v.text_height(), 14);
        assert_eq!(v.text_height(), fonts.measure_text("yY", id, 12.0) as u32);
    }
}
