use compass_engine::coords::Vec2;

/// Side length used for an axis the host leaves unspecified.
pub const DEFAULT_SIZE: f32 = 200.0;

// ── MeasureSpec ───────────────────────────────────────────────────────────

/// One axis of a size proposal handed down by the host layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The host has no opinion; the widget picks its own size.
    Unspecified,
    /// The host requires exactly this many pixels.
    Exactly(f32),
    /// The host allows up to this many pixels.
    AtMost(f32),
}

impl MeasureSpec {
    /// Concrete pixel size carried by the proposal, if any.
    #[inline]
    pub fn size(self) -> Option<f32> {
        match self {
            MeasureSpec::Unspecified => None,
            MeasureSpec::Exactly(px) | MeasureSpec::AtMost(px) => Some(px),
        }
    }
}

impl From<Option<f32>> for MeasureSpec {
    fn from(size: Option<f32>) -> Self {
        size.map_or(MeasureSpec::Unspecified, MeasureSpec::Exactly)
    }
}

// ── resolution ────────────────────────────────────────────────────────────

/// Resolves one axis: unspecified falls back to [`DEFAULT_SIZE`], anything
/// else is taken verbatim.
#[inline]
pub fn resolve_axis(spec: MeasureSpec) -> f32 {
    spec.size().unwrap_or(DEFAULT_SIZE)
}

/// Resolves both axes independently, then uses the smaller for both.
///
/// The result is always square.
#[inline]
#[must_use]
pub fn resolve_square(width: MeasureSpec, height: MeasureSpec) -> Vec2 {
    let side = resolve_axis(width).min(resolve_axis(height));
    Vec2::splat(side)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── resolve_axis ──────────────────────────────────────────────────────

    #[test]
    fn unspecified_axis_uses_default() {
        assert_eq!(resolve_axis(MeasureSpec::Unspecified), 200.0);
    }

    #[test]
    fn concrete_axis_is_verbatim() {
        assert_eq!(resolve_axis(MeasureSpec::Exactly(321.0)), 321.0);
        assert_eq!(resolve_axis(MeasureSpec::AtMost(48.0)), 48.0);
        assert_eq!(resolve_axis(MeasureSpec::Exactly(0.0)), 0.0);
    }

    // ── resolve_square ────────────────────────────────────────────────────

    #[test]
    fn both_unspecified_is_default_square() {
        let s = resolve_square(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(s, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn minimum_wins_for_both_axes() {
        let s = resolve_square(MeasureSpec::Exactly(300.0), MeasureSpec::Exactly(150.0));
        assert_eq!(s, Vec2::new(150.0, 150.0));
    }

    #[test]
    fn unspecified_competes_with_concrete() {
        // Default 200 loses to a larger concrete size...
        let s = resolve_square(MeasureSpec::Unspecified, MeasureSpec::AtMost(500.0));
        assert_eq!(s, Vec2::splat(200.0));
        // ...and wins against a smaller one.
        let s = resolve_square(MeasureSpec::Exactly(120.0), MeasureSpec::Unspecified);
        assert_eq!(s, Vec2::splat(120.0));
    }

    #[test]
    fn result_is_square_for_a_grid_of_proposals() {
        let specs = [
            MeasureSpec::Unspecified,
            MeasureSpec::Exactly(0.0),
            MeasureSpec::Exactly(75.0),
            MeasureSpec::AtMost(200.0),
            MeasureSpec::AtMost(640.0),
        ];
        for &w in &specs {
            for &h in &specs {
                let s = resolve_square(w, h);
                assert_eq!(s.x, s.y);
                assert_eq!(s.x, resolve_axis(w).min(resolve_axis(h)));
            }
        }
    }

    #[test]
    fn option_converts_to_spec() {
        assert_eq!(MeasureSpec::from(None), MeasureSpec::Unspecified);
        assert_eq!(MeasureSpec::from(Some(10.0)), MeasureSpec::Exactly(10.0));
    }
}
