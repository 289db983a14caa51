//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Listener address and site paths are not read here: Leptos picks them up
//! from `[package.metadata.leptos]` and the `LEPTOS_*` variables itself.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or does not parse
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether responses are Brotli/Gzip compressed (`COMPRESSION`, default on)
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var("COMPRESSION").ok())
    }

    /// Build a config from raw variable values
    pub fn from_vars(compression: Option<String>) -> Self {
        Self {
            compression: compression.as_deref().and_then(parse_flag).unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Tracing filter built from the `RUST_LOG` directives
pub fn log_filter() -> EnvFilter {
    parse_log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

/// Parse `RUST_LOG`-style directives (e.g. `info,my_website=debug`),
/// falling back to [`DEFAULT_LOG_FILTER`] when absent or malformed.
pub fn parse_log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Parse a boolean-ish env value. Unknown values yield `None`.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    // ========================================================================
    // Pure constructor tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_defaults_when_unset() {
        let config = Config::from_vars(None);
        assert!(config.compression);
    }

    #[test]
    fn test_compression_toggle() {
        for off in ["0", "false", "OFF", "no"] {
            assert!(!Config::from_vars(Some(off.to_string())).compression);
        }
        for on in ["1", "true", "On", "yes"] {
            assert!(Config::from_vars(Some(on.to_string())).compression);
        }
    }

    #[test]
    fn test_unknown_compression_value_keeps_default() {
        let config = Config::from_vars(Some("maybe".to_string()));
        assert!(config.compression);
    }

    // ========================================================================
    // Log filter tests
    // ========================================================================

    #[test]
    fn test_log_filter_defaults_to_info() {
        let filter = parse_log_filter(None);

        assert_eq!(filter.to_string(), DEFAULT_LOG_FILTER);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_keeps_per_target_directives() {
        let filter = parse_log_filter(Some("info,my_website=debug"));
        let rendered = filter.to_string();

        assert!(rendered.contains("my_website=debug"), "got {rendered}");
        assert!(rendered.contains("info"), "got {rendered}");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_log_filter_plain_level() {
        let filter = parse_log_filter(Some("warn"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_malformed_log_filter_falls_back() {
        let filter = parse_log_filter(Some("my_website=loud"));
        assert_eq!(filter.to_string(), DEFAULT_LOG_FILTER);
    }
}
