use std::sync::Once;

use env_logger::WriteStyle;
use log::LevelFilter;

/// How the studio (or any host binary) wants its log output.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directives in `env_logger` syntax, e.g. `compass_ui=trace,warn`.
    /// Takes precedence over `RUST_LOG` when set.
    pub filter: Option<String>,
    /// Terminal coloring.
    pub color: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: None, color: WriteStyle::Auto }
    }
}

impl LoggingConfig {
    /// Directives actually applied: explicit filter, then `RUST_LOG`, then none.
    fn directives(&self) -> Option<String> {
        self.filter.clone().or_else(|| std::env::var("RUST_LOG").ok())
    }
}

static LOGGER: Once = Once::new();

/// Installs `env_logger` as the `log` backend.
///
/// Only the first call has any effect. With no directives the level is `info`.
/// A logger installed by someone else is left in place.
pub fn init_logging(config: LoggingConfig) {
    LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.directives() {
            Some(directives) => builder.parse_filters(&directives),
            None => builder.filter_level(LevelFilter::Info),
        };
        builder.write_style(config.color);

        match builder.try_init() {
            Ok(()) => log::debug!("env_logger ready"),
            Err(e) => log::debug!("keeping the existing logger: {e}"),
        }
    });
}
