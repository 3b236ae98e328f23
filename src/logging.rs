use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "FIZZBUZZ_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Pick the filter: `FIZZBUZZ_LOG` wins, then the configured level, then `warn`.
pub fn build_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init_logging(configured: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_logging(Some("debug"));
        init_logging(None);
        tracing::debug!("logging initialized");
    }

    #[test]
    fn invalid_configured_level_falls_back() {
        // A directive that cannot be parsed must not abort start-up.
        let filter = build_filter(Some("[[not a filter"));
        assert!(!filter.to_string().is_empty());
    }
}
