//! Logging bootstrap for the binary

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::GlobalOpts;
use crate::core::Config;

/// Pick the filter directive: flags, then RUST_LOG, then config
pub fn log_directive(global: &GlobalOpts, rust_log: Option<String>, config: &Config) -> String {
    if global.verbose {
        return "debug".to_string();
    }
    if global.quiet {
        return "error".to_string();
    }
    rust_log
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| config.log_level().to_string())
}

/// Initialise the global `tracing` subscriber, writing to stderr
///
/// Falls back to `warn` if the directive does not parse.
pub fn setup_logging(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second init (e.g. from tests) is not an error worth surfacing
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(verbose: bool, quiet: bool) -> GlobalOpts {
        GlobalOpts { quiet, verbose }
    }

    #[test]
    fn test_verbose_wins() {
        let directive = log_directive(
            &opts(true, true),
            Some("info".to_string()),
            &Config::default(),
        );
        assert_eq!(directive, "debug");
    }

    #[test]
    fn test_quiet_over_env() {
        let directive = log_directive(
            &opts(false, true),
            Some("info".to_string()),
            &Config::default(),
        );
        assert_eq!(directive, "error");
    }

    #[test]
    fn test_env_over_config() {
        let config = Config {
            log_level: Some("trace".to_string()),
            ..Default::default()
        };
        assert_eq!(log_directive(&opts(false, false), Some("info".to_string()), &config), "info");
        assert_eq!(log_directive(&opts(false, false), None, &config), "trace");
        assert_eq!(log_directive(&opts(false, false), Some(" ".to_string()), &config), "trace");
    }

    #[test]
    fn test_default_is_warn() {
        assert_eq!(log_directive(&opts(false, false), None, &Config::default()), "warn");
    }
}
