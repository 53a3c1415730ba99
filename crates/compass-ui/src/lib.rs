//! Compass UI: a compass dial widget on top of `compass-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use compass_ui::prelude::*;
//!
//! let metrics = MonospaceMetrics::default();
//! let mut compass = CompassView::new(CompassStyle::default(), &metrics);
//!
//! // Whenever the heading source reports a new value:
//! let change = compass.set_bearing(heading, widget_is_visible)?;
//! if let Some(event) = change.notification {
//!     screen_reader.announce(event.text());
//! }
//! if change.redraw {
//!     let draw_list = compass.render(width_spec, height_spec, &metrics);
//!     // Pass draw_list to a surface.
//! }
//! ```
//!
//! Hosts that keep the bearing themselves can call [`render`] directly.

pub mod accessibility;
pub mod compass;
pub mod config;
pub mod measure;
pub mod painter;
pub mod style;
pub mod widget;

pub use compass::{render, BearingChange, BearingError, CompassView};

/// Everything needed to drive a compass from host code.
pub mod prelude {
    pub use crate::accessibility::{bearing_text, AccessibilityEvent};
    pub use crate::compass::{render, BearingChange, BearingError, CompassView, DialGeometry, TickLabel};
    pub use crate::config::{load_str, load_str_with, CompassConfig, ConfigError};
    pub use crate::measure::{resolve_axis, resolve_square, MeasureSpec, DEFAULT_SIZE};
    pub use crate::painter::Painter;
    pub use crate::style::CompassStyle;
    pub use crate::widget::Widget;

    // Re-export the engine primitives everyone needs.
    pub use compass_engine::coords::{Transform, Vec2};
    pub use compass_engine::paint::Color;
    pub use compass_engine::render::SvgSurface;
    pub use compass_engine::scene::{DrawCmd, DrawItem, DrawList};
    pub use compass_engine::text::{FontId, FontSystem, MonospaceMetrics, TextMeasure};
}
