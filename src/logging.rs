use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr
///
/// Runs before the configuration is read so its warnings are not lost. Safe
/// to call more than once; later calls are no-ops.
pub fn init(log_filter: &str) {
    let filter = EnvFilter::try_new(log_filter)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
