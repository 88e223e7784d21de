//! Log setup shared by the binaries.
//!
//! Logs go to stderr so stdout only ever carries results.

use tracing_subscriber::EnvFilter;

/// Default filter when neither a flag nor `RUST_LOG` chooses one.
const DEFAULT_FILTER: &str = "warn";

/// Pick the filter: `--quiet` wins, then `--verbose`, then `RUST_LOG`.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn setup_logging(verbose: bool, quiet: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
