use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "congress_contacts=info";

/// Initializes logging to stderr, filtered by RUST_LOG.
/// Stdout is left free for callers.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // A subscriber may already be installed when embedded in another program
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
