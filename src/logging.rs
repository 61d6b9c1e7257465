//! Diagnostic logging setup
//!
//! Events go to stderr through `tracing-subscriber`. `RUST_LOG` takes
//! precedence over the level derived from the CLI flags.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log level for the given verbosity flags
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Default filter directive for `level`
pub fn default_directive(level: Level) -> String {
    format!("yarn_sync={}", level.to_string().to_lowercase())
}

/// Initialize the global subscriber
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = level_for(verbose, quiet);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false, false), Level::WARN);
        assert_eq!(level_for(true, false), Level::DEBUG);
        assert_eq!(level_for(false, true), Level::ERROR);
        assert_eq!(level_for(true, true), Level::ERROR);
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(Level::DEBUG), "yarn_sync=debug");
        assert_eq!(default_directive(Level::WARN), "yarn_sync=warn");
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(false, true);
        init_logging(true, false);
    }
}
