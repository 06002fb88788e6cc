//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Build the default filter directive for a binary.
///
/// Cargo binary names use `-` while tracing targets use the crate path, so
/// `lounge-server` becomes `lounge_server`.
pub fn default_directive(bin_name: &str, level: &str) -> String {
    let target = bin_name.replace('-', "_");
    format!("{target}={level},tower_http={level}")
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the default directive built from
/// `bin_name` and `level`.
pub fn setup_logger(bin_name: &str, level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(bin_name, level)));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_err()
    {
        eprintln!("tracing subscriber was already initialized");
        return;
    }

    tracing::debug!("Logger initialized for '{}'", bin_name);
}
