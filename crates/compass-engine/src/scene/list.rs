use crate::coords::{Transform, Vec2};

use super::DrawCmd;

/// A single draw item: command + the transform current when it was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// Local-to-surface transform. Command coordinates are in local space.
    pub transform: Transform,
}

impl DrawItem {
    /// The command with its anchor points mapped into surface space.
    #[inline]
    pub fn resolved(&self) -> DrawCmd {
        self.cmd.mapped(self.transform)
    }
}

/// Recorded draw stream for one render pass.
///
/// Items are kept in recording order, which is also paint order (back-to-front).
///
/// # Transforms
///
/// The list carries a canvas-style transform stack. [`save`] / [`restore`]
/// bracket a scope; [`rotate_about`] and [`translate`] modify the current
/// transform in place. Every pushed command captures the current transform.
///
/// ```
/// # use compass_engine::coords::Vec2;
/// # use compass_engine::paint::Color;
/// # use compass_engine::scene::DrawList;
/// let mut list = DrawList::new();
/// list.save();
/// list.rotate_about(-90.0, Vec2::new(100.0, 100.0));
/// list.push_line(Vec2::new(100.0, 0.0), Vec2::new(100.0, 10.0), Color::white(), 1.0);
/// list.restore();
/// assert_eq!(list.len(), 1);
/// ```
///
/// [`save`]: DrawList::save
/// [`restore`]: DrawList::restore
/// [`rotate_about`]: DrawList::rotate_about
/// [`translate`]: DrawList::translate
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    current: Transform,
    /// Transforms saved by [`DrawList::save`], innermost last.
    saved: Vec<Transform>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the transform stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.saved.clear();
        self.current = Transform::IDENTITY;
    }

    /// Returns items in recording (= paint) order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &DrawItem> {
        self.items.iter()
    }

    /// Iterates commands mapped into surface space.
    pub fn resolved(&self) -> impl Iterator<Item = DrawCmd> + '_ {
        self.items.iter().map(DrawItem::resolved)
    }

    /// Pushes a draw command under the current transform.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem { cmd, transform: self.current });
    }

    // ── transform stack ───────────────────────────────────────────────────

    /// The transform new commands are recorded under.
    #[inline]
    pub fn transform(&self) -> Transform {
        self.current
    }

    /// Number of unmatched [`DrawList::save`] calls.
    #[inline]
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    /// Remembers the current transform. Calls must be balanced with [`DrawList::restore`].
    #[inline]
    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Returns to the transform remembered by the most recent [`DrawList::save`].
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `save`.
    #[inline]
    pub fn restore(&mut self) {
        debug_assert!(!self.saved.is_empty(), "restore called without matching save");
        if let Some(t) = self.saved.pop() {
            self.current = t;
        }
    }

    /// Rotates subsequent commands by `degrees` (clockwise on screen) about `pivot`.
    #[inline]
    pub fn rotate_about(&mut self, degrees: f32, pivot: Vec2) {
        self.current = self.current.then_local(Transform::rotation_about(degrees, pivot));
    }

    /// Offsets subsequent commands by `(dx, dy)` in the current local frame.
    #[inline]
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.current = self.current.then_local(Transform::translation(dx, dy));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn line(list: &mut DrawList) {
        list.push_line(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), Color::white(), 1.0);
    }

    #[test]
    fn items_capture_transform_at_push_time() {
        let mut list = DrawList::new();
        line(&mut list);
        list.translate(5.0, 0.0);
        line(&mut list);

        assert!(list.items()[0].transform.is_identity());
        assert_eq!(list.items()[1].transform.translation_part(), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn restore_returns_to_saved_transform() {
        let mut list = DrawList::new();
        list.save();
        list.rotate_about(30.0, Vec2::new(50.0, 50.0));
        list.translate(0.0, 12.0);
        assert_eq!(list.save_depth(), 1);
        list.restore();

        assert!(list.transform().is_identity());
        assert_eq!(list.save_depth(), 0);
    }

    #[test]
    fn translate_happens_in_rotated_frame() {
        let mut list = DrawList::new();
        list.rotate_about(90.0, Vec2::zero());
        list.translate(0.0, -10.0);
        line(&mut list);

        let DrawCmd::Line(l) = list.items()[0].resolved() else { panic!("expected line") };
        // "Up" in the rotated frame points right on screen.
        assert!(l.from.distance(Vec2::new(10.0, 0.0)) < 1e-4, "{:?}", l.from);
    }

    #[test]
    fn clear_resets_items_and_stack() {
        let mut list = DrawList::new();
        list.save();
        list.translate(3.0, 3.0);
        line(&mut list);
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.save_depth(), 0);
        assert!(list.transform().is_identity());
    }
}
