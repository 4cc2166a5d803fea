//! Logging configuration and initialization
//!
//! Log lines go to stderr so they never mix with anything written to stdout.

use crate::app::config::AppConfig;
use tracing::{debug, trace};

/// Initialize tracing/logging for the application
pub fn init_logging(config: &AppConfig) {
    init_tracing(config.verbose, config.log_level());
}

/// Initialize tracing from a verbosity level and filter directive
///
/// `RUST_LOG` takes precedence over the verbosity flag when set. Only the
/// first call installs a subscriber; later calls keep it.
pub fn init_tracing(verbose: u8, default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2) // Show target module for -vv and above
        .with_line_number(verbose >= 2)
        .try_init();

    if let Err(e) = installed {
        debug!("Keeping the existing tracing subscriber: {}", e);
        return;
    }

    debug!("route_manager started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_keeps_first_subscriber() {
        init_tracing(0, "warn");
        init_tracing(2, "trace");
        assert!(tracing::dispatcher::has_been_set());
    }
}
