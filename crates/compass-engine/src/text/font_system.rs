use std::fmt;

use super::TextMeasure;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
///
/// The default handle refers to the first font loaded.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} ({} glyphs)", id, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Single-line advance width of `text` in logical pixels.
    ///
    /// Sum of the glyph advances plus pair kerning, unrounded. This is the
    /// pen position after the last glyph, which is what a canvas
    /// `measureText` reports.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> f32 {
        let Some(font) = self.get(id) else {
            log::warn!("FontSystem: unknown FontId {:?}, measuring as zero width", id);
            return 0.0;
        };

        let mut width = 0.0;
        let mut prev = None;
        for c in text.chars() {
            if let Some(p) = prev {
                width += font.horizontal_kern(p, c, size).unwrap_or(0.0);
            }
            width += font.metrics(c, size).advance_width;
            prev = Some(c);
        }
        width
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for FontSystem {
    #[inline]
    fn measure_width(&self, text: &str, font: FontId, size: f32) -> f32 {
        self.measure_text(text, font, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(b"definitely not a font").unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
        assert!(fonts.is_empty());
    }

    #[test]
    fn unknown_font_measures_zero() {
        let fonts = FontSystem::new();
        assert_eq!(fonts.measure_width("N", FontId::default(), 12.0), 0.0);
    }

    // ── real fonts ────────────────────────────────────────────────────────

    /// A DejaVu Sans install, if the machine has one.
    fn dejavu() -> Option<(FontSystem, FontId, fontdue::Font)> {
        let bytes = [
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        ]
        .iter()
        .find_map(|p| std::fs::read(p).ok())?;
        let mut fonts = FontSystem::new();
        let id = fonts.load_font(&bytes).ok()?;
        let raw = fontdue::Font::from_bytes(bytes.as_slice(), fontdue::FontSettings::default()).ok()?;
        Some((fonts, id, raw))
    }

    fn summed_advances(font: &fontdue::Font, text: &str, size: f32) -> f32 {
        let chars: Vec<char> = text.chars().collect();
        let kern: f32 = chars
            .windows(2)
            .map(|w| font.horizontal_kern(w[0], w[1], size).unwrap_or(0.0))
            .sum();
        chars.iter().map(|&c| font.metrics(c, size).advance_width).sum::<f32>() + kern
    }

    #[test]
    fn width_is_the_sum_of_advances() {
        let Some((fonts, id, raw)) = dejavu() else {
            eprintln!("DejaVu Sans not installed; skipping");
            return;
        };
        for (text, size) in [("yY", 12.0), ("135", 14.0), ("a b", 12.0), ("W", 12.0)] {
            let got = fonts.measure_text(text, id, size);
            let want = summed_advances(&raw, text, size);
            assert!((got - want).abs() < 1e-4, "{text:?}@{size}: {got} vs {want}");
        }
    }

    #[test]
    fn multi_glyph_width_is_not_pixel_snapped() {
        let Some((fonts, id, _)) = dejavu() else {
            eprintln!("DejaVu Sans not installed; skipping");
            return;
        };
        // DejaVu advances for "yY" sum to 14.43 at 12px.
        let w = fonts.measure_text("yY", id, 12.0);
        assert!((14.0..15.0).contains(&w), "{w}");
    }

    #[test]
    fn empty_text_is_zero_width() {
        let Some((fonts, id, _)) = dejavu() else {
            return;
        };
        assert_eq!(fonts.measure_text("", id, 12.0), 0.0);
    }
}
