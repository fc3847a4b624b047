//! Log output for the zraster binary.
//!
//! Library code only emits through the `log` macros: growth events at trace,
//! per-batch draw counts at debug, refused batches and bad settings at warn.
//! A binary calls [`init_logging`] at startup to route those records to
//! `env_logger`.

use std::sync::Once;

use log::LevelFilter;

/// Where the log filter comes from and how records are styled.
///
/// `env_filter` uses `env_logger` directive syntax, for example
/// `"zraster::render=debug"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    /// Level used when neither `env_filter` nor `RUST_LOG` is set.
    pub fallback_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            fallback_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// The filter directives to install: explicit filter, then `rust_log`,
    /// then the fallback level.
    fn directives(&self, rust_log: Option<String>) -> String {
        self.env_filter
            .clone()
            .or(rust_log)
            .unwrap_or_else(|| self.fallback_level.to_string())
    }
}

static INIT: Once = Once::new();

/// Installs the `env_logger` backend on the first call; later calls, or a
/// logger already installed by the host, leave things as they are.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let directives = config.directives(std::env::var("RUST_LOG").ok());
        let installed = env_logger::Builder::new()
            .parse_filters(&directives)
            .write_style(config.write_style)
            .try_init();
        if installed.is_ok() {
            log::debug!("zraster logging enabled with {directives:?}");
        }
    });
}
