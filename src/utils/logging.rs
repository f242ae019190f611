use tracing_subscriber::EnvFilter;

/// Initialize tracing for the embedding application.
///
/// `default_level` usually comes from the config layer; a set `RUST_LOG`
/// still wins.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Use try_init so tests and libraries can call this multiple times without panicking
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
