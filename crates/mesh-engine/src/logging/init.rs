use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "mesh_engine=debug").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Fallback level when neither `env_filter` nor `RUST_LOG` is set.
    pub default_level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            default_level: LevelFilter::Info,
        }
    }
}

impl LoggingConfig {
    /// Maps a `-v` count onto the fallback level: 0 = info, 1 = debug, 2+ = trace.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.default_level = match verbosity {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.default_level);
        }

        builder.write_style(config.write_style);
        builder.format_timestamp(None);

        // `try_init` so a logger installed by a test harness is not an error.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        let c = LoggingConfig::default();
        assert_eq!(c.default_level, LevelFilter::Info);
        assert_eq!(c.clone().with_verbosity(1).default_level, LevelFilter::Debug);
        assert_eq!(c.with_verbosity(5).default_level, LevelFilter::Trace);
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(LoggingConfig::default().with_filter("warn"));
        init_logging(LoggingConfig::default());
    }
}
