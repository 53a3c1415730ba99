//! Style documents.
//!
//! A compass can be configured from a small `.mkml`-style document instead of
//! code:
//!
//! ```text
//! // compass.mkml
//! Compass {
//!     bearing: 45
//!     background: #2b2b2bff
//!     marker: #ffffff
//!     text: #ffffff
//!     text_size: 14
//!     marker_width: 1
//!     north: "N"  east: "E"  south: "S"  west: "W"
//! }
//! ```
//!
//! Every property is optional; missing ones keep the [`CompassStyle`] default.

pub mod error;
pub mod lexer;
pub mod parser;

use std::collections::HashSet;

use compass_engine::paint::Color;
use compass_engine::text::TextMeasure;

use crate::compass::CompassView;
use crate::style::CompassStyle;

pub use error::{ConfigError, ParseError};
use parser::{Prop, Value};

/// Name the root block must carry.
pub const ROOT_NAME: &str = "Compass";

/// Result of loading a style document.
#[derive(Debug, Clone, PartialEq)]
pub struct CompassConfig {
    pub style: CompassStyle,
    /// Initial bearing, if the document sets one.
    pub bearing: Option<f32>,
}

impl CompassConfig {
    /// Builds a view from this configuration.
    ///
    /// The initial bearing is applied as a hidden change: nothing is announced
    /// before the host shows the widget.
    pub fn into_view(self, metrics: &dyn TextMeasure) -> CompassView {
        let mut view = CompassView::new(self.style, metrics);
        if let Some(bearing) = self.bearing {
            // Finite by construction: `apply` rejects anything else.
            if let Err(e) = view.set_bearing(bearing, false) {
                log::warn!("ignoring configured bearing: {e}");
            }
        }
        view
    }
}

/// Parses `src` and layers its properties over `base`.
pub fn load_str_with(src: &str, base: CompassStyle) -> Result<CompassConfig, ConfigError> {
    let block = parser::parse_str(src)?;
    if block.name != ROOT_NAME {
        return Err(ConfigError::UnknownRoot(block.name));
    }

    let mut config = CompassConfig { style: base, bearing: None };
    let mut seen = HashSet::new();
    for prop in &block.props {
        if !seen.insert(prop.key.as_str()) {
            return Err(ConfigError::DuplicateKey { key: prop.key.clone(), line: prop.line });
        }
        apply(&mut config, prop)?;
    }

    log::debug!("loaded compass style with {} properties", block.props.len());
    Ok(config)
}

/// Parses `src` over the default style.
pub fn load_str(src: &str) -> Result<CompassConfig, ConfigError> {
    load_str_with(src, CompassStyle::default())
}

fn apply(config: &mut CompassConfig, prop: &Prop) -> Result<(), ConfigError> {
    let style = &mut config.style;
    match prop.key.as_str() {
        "bearing" => config.bearing = Some(finite(prop)?),
        "background" => style.background_color = color(prop)?,
        "marker" => style.marker_color = color(prop)?,
        "text" => style.text_color = color(prop)?,
        "north" => style.north = string(prop)?,
        "east" => style.east = string(prop)?,
        "south" => style.south = string(prop)?,
        "west" => style.west = string(prop)?,
        "text_size" => style.text_size = positive(prop)?,
        "marker_width" => style.marker_width = positive(prop)?,
        _ => return Err(ConfigError::UnknownKey { key: prop.key.clone(), line: prop.line }),
    }
    Ok(())
}

fn wrong_type(prop: &Prop, expected: &'static str) -> ConfigError {
    ConfigError::WrongType { key: prop.key.clone(), expected, line: prop.line }
}

fn invalid(prop: &Prop, reason: &'static str) -> ConfigError {
    ConfigError::InvalidValue { key: prop.key.clone(), reason, line: prop.line }
}

fn color(prop: &Prop) -> Result<Color, ConfigError> {
    match prop.value {
        Value::Color([r, g, b, a]) => Ok(Color::from_srgb_u8(r, g, b, a)),
        _ => Err(wrong_type(prop, "a color (#rrggbb or #rrggbbaa)")),
    }
}

fn string(prop: &Prop) -> Result<String, ConfigError> {
    match &prop.value {
        Value::Str(s) => Ok(s.clone()),
        _ => Err(wrong_type(prop, "a quoted string")),
    }
}

fn finite(prop: &Prop) -> Result<f32, ConfigError> {
    match prop.value {
        Value::Number(n) if n.is_finite() => Ok(n),
        Value::Number(_) => Err(invalid(prop, "must be finite")),
        _ => Err(wrong_type(prop, "a number")),
    }
}

fn positive(prop: &Prop) -> Result<f32, ConfigError> {
    let n = finite(prop)?;
    if n > 0.0 { Ok(n) } else { Err(invalid(prop, "must be greater than zero")) }
}
