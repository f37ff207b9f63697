use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use crate::config::SystemConfig;

/// Configures the global tracing subscriber once for the process.
///
/// `RUST_LOG` wins over the configured filter:
/// ```bash
/// RUST_LOG=debug cakebake
/// RUST_LOG=cakebake::clients=debug,info cakebake
/// ```
pub fn setup_tracing(config: &SystemConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();

    for fallback in &config.fallbacks {
        warn!("{fallback}");
    }
    info!(channel_capacity = config.channel_capacity, log_filter = %config.log_filter, "Tracing configured");
}
