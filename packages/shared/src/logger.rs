//! Logger setup based on tracing / tracing-subscriber.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The filter defaults to `<bin_name>=<default_level>,tower_http=<default_level>`
/// and can be overridden with the `RUST_LOG` environment variable.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let default_directives = format!(
        "{}={level},danwa_server={level},danwa_shared={level},tower_http={level}",
        bin_name.replace('-', "_"),
        level = default_level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
