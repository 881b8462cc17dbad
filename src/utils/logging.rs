use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber at `level`. Logs are written to stderr so
/// stdout only carries the leaderboard.
pub fn init_logging(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
