use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "snurr_engine=debug,glutin=warn").
///
/// Filter precedence: `env_filter`, then `RUST_LOG`, then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
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

        match resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
            }
        }

        builder.write_style(config.write_style);

        // Logs go to stderr; stdout is reserved for the startup diagnostic line.
        builder.target(env_logger::Target::Stderr);
        builder.init();

        log::debug!("logging initialized");
    });
}

fn resolve_filter(explicit: Option<String>, env: Option<String>) -> Option<String> {
    explicit
        .or(env)
        .filter(|filter| !filter.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_env() {
        let filter = resolve_filter(Some("debug".into()), Some("warn".into()));
        assert_eq!(filter.as_deref(), Some("debug"));
    }

    #[test]
    fn env_filter_used_when_no_explicit_filter() {
        let filter = resolve_filter(None, Some("snurr_engine=trace".into()));
        assert_eq!(filter.as_deref(), Some("snurr_engine=trace"));
    }

    #[test]
    fn blank_filter_falls_back_to_default_level() {
        assert_eq!(resolve_filter(None, Some("  ".into())), None);
        assert_eq!(resolve_filter(None, None), None);
    }
}
