//! Tracing/logging initialization.
//!
//! `RUST_LOG` drives filtering (see [`EnvFilter`]); `REPOKIT_LOG_FORMAT`
//! picks the output format (`json`, the default, or `compact`).

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "REPOKIT_LOG_FORMAT";

/// Output format of the process subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event, with timestamps.
    #[default]
    Json,
    /// Single-line human-readable events.
    Compact,
}

impl LogFormat {
    /// Case-insensitive; unknown values fall back to [`LogFormat::Json`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Self::Compact,
            _ => Self::Json,
        }
    }

    fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }
}

/// Subscriber settings used by [`init_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Directive used when `RUST_LOG` is unset or invalid.
    pub default_directive: String,
}

impl LogConfig {
    /// Format from `REPOKIT_LOG_FORMAT`, `info` unless `RUST_LOG` says otherwise.
    pub fn from_env() -> Self {
        Self {
            format: LogFormat::from_env(),
            default_directive: "info".to_string(),
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_directive))
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            default_directive: "info".to_string(),
        }
    }
}

/// Initialize process logging from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(&LogConfig::from_env());
}

/// Initialize process logging with explicit settings.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_with(config: &LogConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(false);

    match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init()
            .is_ok(),
        LogFormat::Compact => builder.compact().try_init().is_ok(),
    }
}

/// Initialize compact, test-captured logging (defaults to `debug`).
///
/// Safe to call from every test (subsequent calls are no-ops).
pub fn init_for_tests() {
    let config = LogConfig {
        format: LogFormat::Compact,
        default_directive: "debug".to_string(),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .compact()
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parsing_is_lenient() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" COMPACT "), LogFormat::Compact);
        assert_eq!(LogFormat::parse("text"), LogFormat::Compact);
        assert_eq!(LogFormat::parse("yaml"), LogFormat::Json);
        assert_eq!(LogFormat::parse(""), LogFormat::Json);
    }

    #[test]
    fn default_config_is_json_at_info() {
        let config = LogConfig::default();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.default_directive, "info");
    }

    #[test]
    fn only_the_first_initialization_installs_a_subscriber() {
        init_for_tests();
        init();
        assert!(!init_with(&LogConfig::default()));
        ::tracing::info!("still logging after repeated init");
    }
}
