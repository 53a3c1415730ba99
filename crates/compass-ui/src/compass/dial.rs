use compass_engine::coords::Vec2;

use crate::painter::Painter;
use crate::style::CompassStyle;

/// Ticks around the full dial.
pub const TICK_COUNT: usize = 24;
/// Angle between neighbouring ticks, in degrees.
pub const TICK_STEP_DEGREES: f32 = 15.0;
/// Radial length of every tick.
pub const TICK_LENGTH: f32 = 10.0;
/// Horizontal reach of each arrowhead stroke from the apex.
pub const ARROW_HALF_WIDTH: f32 = 5.0;

/// What, besides the tick itself, is drawn at a tick index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickLabel {
    /// Cardinal label for a quarter turn (0 = north .. 3 = west).
    Cardinal(usize),
    /// Numeric heading in degrees.
    Heading(u32),
    /// Tick only.
    None,
}

impl TickLabel {
    /// Classifies tick `index` (0-based, clockwise from north).
    pub fn for_index(index: usize) -> TickLabel {
        if index % 6 == 0 {
            TickLabel::Cardinal(index / 6)
        } else if index % 3 == 0 {
            TickLabel::Heading(index as u32 * TICK_STEP_DEGREES as u32)
        } else {
            TickLabel::None
        }
    }
}

/// Center and radius of the dial face inside a square of side `side`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialGeometry {
    pub center: Vec2,
    pub radius: f32,
}

impl DialGeometry {
    pub fn for_side(side: f32) -> Self {
        let center = Vec2::splat(side / 2.0);
        Self { center, radius: center.x.min(center.y) }
    }
}

/// Records one full dial pass.
///
/// The face is drawn unrotated. Everything else is drawn in a frame rotated by
/// `-bearing` about the center so that north keeps pointing north while the
/// device turns; each tick then advances that frame by another
/// [`TICK_STEP_DEGREES`].
pub(crate) fn paint_dial(
    painter: &mut Painter,
    side: f32,
    bearing: f32,
    style: &CompassStyle,
    text_height: u32,
) {
    if !bearing.is_finite() {
        log::warn!("dial painted with non-finite bearing {bearing}; geometry will be non-finite");
    }

    let DialGeometry { center, radius } = DialGeometry::for_side(side);
    let (px, py) = (center.x, center.y);
    let th = text_height as f32;
    let label_y = (py - radius + th).trunc();

    painter.fill_circle(center, radius, style.background_color);

    painter.save();
    painter.rotate(-bearing, center);

    for index in 0..TICK_COUNT {
        painter.line(
            Vec2::new(px, py - radius),
            Vec2::new(px, py - radius + TICK_LENGTH),
            style.marker_color,
            style.marker_width,
        );

        painter.save();
        painter.translate(0.0, th);

        let label = match TickLabel::for_index(index) {
            TickLabel::Cardinal(quarter) => {
                if quarter == 0 {
                    paint_north_arrow(painter, px, th, style);
                }
                Some(style.cardinal(quarter).to_string())
            }
            TickLabel::Heading(degrees) => Some(degrees.to_string()),
            TickLabel::None => None,
        };

        if let Some(label) = label {
            let width = painter.measure_text(&label, style.font, style.text_size);
            let x = (px - width / 2.0).trunc();
            painter.text(label, style.font, style.text_size, style.text_color, Vec2::new(x, label_y));
        }

        painter.restore();
        painter.rotate(TICK_STEP_DEGREES, center);
    }

    painter.restore();
}

fn paint_north_arrow(painter: &mut Painter, px: f32, th: f32, style: &CompassStyle) {
    let apex = Vec2::new(px, 2.0 * th);
    let base_y = 3.0 * th;
    painter.line(apex, Vec2::new(px - ARROW_HALF_WIDTH, base_y), style.marker_color, style.marker_width);
    painter.line(apex, Vec2::new(px + ARROW_HALF_WIDTH, base_y), style.marker_color, style.marker_width);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_fire_on_every_third_tick() {
        let labelled: Vec<usize> = (0..TICK_COUNT)
            .filter(|&i| TickLabel::for_index(i) != TickLabel::None)
            .collect();
        assert_eq!(labelled, [0, 3, 6, 9, 12, 15, 18, 21]);
    }

    #[test]
    fn cardinals_sit_on_quarter_turns() {
        assert_eq!(TickLabel::for_index(0), TickLabel::Cardinal(0));
        assert_eq!(TickLabel::for_index(6), TickLabel::Cardinal(1));
        assert_eq!(TickLabel::for_index(12), TickLabel::Cardinal(2));
        assert_eq!(TickLabel::for_index(18), TickLabel::Cardinal(3));
    }

    #[test]
    fn headings_are_index_times_fifteen() {
        let headings: Vec<u32> = (0..TICK_COUNT)
            .filter_map(|i| match TickLabel::for_index(i) {
                TickLabel::Heading(d) => Some(d),
                _ => None,
            })
            .collect();
        assert_eq!(headings, [45, 135, 225, 315]);
    }

    #[test]
    fn geometry_centers_in_square() {
        let g = DialGeometry::for_side(200.0);
        assert_eq!(g.center, Vec2::new(100.0, 100.0));
        assert_eq!(g.radius, 100.0);
    }
}
