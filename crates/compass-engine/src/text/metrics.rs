use super::FontId;

/// Source of text advance widths.
///
/// Implementations must be deterministic: the dial measures the same string
/// more than once per pass and expects identical answers.
pub trait TextMeasure {
    /// Width in logical pixels of `text` laid out on a single line.
    fn measure_width(&self, text: &str, font: FontId, size: f32) -> f32;
}

/// Fixed-advance metrics: every character is `advance_ratio × size` wide.
///
/// Stands in for a real font when none is available, and gives tests exact
/// numbers to assert against.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonospaceMetrics {
    pub advance_ratio: f32,
}

impl MonospaceMetrics {
    #[inline]
    pub const fn new(advance_ratio: f32) -> Self {
        Self { advance_ratio }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl TextMeasure for MonospaceMetrics {
    fn measure_width(&self, text: &str, _font: FontId, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.advance_ratio
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    #[inline]
    fn measure_width(&self, text: &str, font: FontId, size: f32) -> f32 {
        (**self).measure_width(text, font, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospace_width_scales_with_chars_and_size() {
        let m = MonospaceMetrics::new(0.5);
        assert_eq!(m.measure_width("yY", FontId::default(), 12.0), 12.0);
        assert_eq!(m.measure_width("135", FontId::default(), 12.0), 18.0);
    }

    #[test]
    fn monospace_counts_chars_not_bytes() {
        let m = MonospaceMetrics::new(1.0);
        assert_eq!(m.measure_width("Ñ", FontId::default(), 10.0), 10.0);
    }

    #[test]
    fn empty_string_is_zero_width() {
        assert_eq!(MonospaceMetrics::default().measure_width("", FontId::default(), 12.0), 0.0);
    }
}
