//! Fonts and text measurement.
//!
//! Layout code only needs advance widths, so it talks to the [`TextMeasure`]
//! trait. [`FontSystem`] answers from real font files through `fontdue`;
//! [`MonospaceMetrics`] answers from a fixed per-character advance.

mod font_system;
mod metrics;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use metrics::{MonospaceMetrics, TextMeasure};
