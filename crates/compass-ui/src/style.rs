use compass_engine::paint::Color;
use compass_engine::text::{FontId, TextMeasure};

/// String measured once to derive the vertical label offset.
pub const TEXT_HEIGHT_REFERENCE: &str = "yY";

/// Colors, labels and font used to draw the dial.
///
/// Immutable for the lifetime of a [`CompassView`](crate::compass::CompassView).
///
/// # Example
/// ```rust,ignore
/// CompassStyle::new()
///     .background(Color::from_srgb_u8(0x20, 0x20, 0x30, 0xff))
///     .north("Nord")
///     .text_size(14.0)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompassStyle {
    pub background_color: Color,
    pub marker_color: Color,
    pub text_color: Color,
    pub north: String,
    pub east: String,
    pub south: String,
    pub west: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub text_size: f32,
    /// Stroke width of ticks and the north arrowhead.
    pub marker_width: f32,
}

impl CompassStyle {
    pub fn new() -> Self {
        Self {
            background_color: Color::from_srgb_u8(0x2b, 0x2b, 0x2b, 0xff),
            marker_color: Color::white(),
            text_color: Color::white(),
            north: "N".to_string(),
            east: "E".to_string(),
            south: "S".to_string(),
            west: "W".to_string(),
            font: FontId::default(),
            text_size: 12.0,
            marker_width: 1.0,
        }
    }

    pub fn background(mut self, v: Color) -> Self { self.background_color = v; self }
    pub fn marker(mut self, v: Color) -> Self { self.marker_color = v; self }
    pub fn text(mut self, v: Color) -> Self { self.text_color = v; self }
    pub fn north(mut self, v: impl Into<String>) -> Self { self.north = v.into(); self }
    pub fn east(mut self, v: impl Into<String>) -> Self { self.east = v.into(); self }
    pub fn south(mut self, v: impl Into<String>) -> Self { self.south = v.into(); self }
    pub fn west(mut self, v: impl Into<String>) -> Self { self.west = v.into(); self }
    pub fn font(mut self, v: FontId) -> Self { self.font = v; self }
    pub fn text_size(mut self, v: f32) -> Self { self.text_size = v; self }
    pub fn marker_width(mut self, v: f32) -> Self { self.marker_width = v; self }

    /// Cardinal label for a quarter turn: 0 → north, 1 → east, 2 → south, 3 → west.
    pub fn cardinal(&self, quarter: usize) -> &str {
        match quarter % 4 {
            0 => &self.north,
            1 => &self.east,
            2 => &self.south,
            _ => &self.west,
        }
    }

    /// Vertical label offset in whole pixels, measured from
    /// [`TEXT_HEIGHT_REFERENCE`] and never less than 1.
    pub fn text_height(&self, metrics: &dyn TextMeasure) -> u32 {
        let measured = metrics.measure_width(TEXT_HEIGHT_REFERENCE, self.font, self.text_size);
        if measured.is_finite() { (measured as u32).max(1) } else { 1 }
    }
}

impl Default for CompassStyle { fn default() -> Self { Self::new() } }
