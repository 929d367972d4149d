pub mod classifier;
pub mod config;
pub mod intake;
pub mod models;
pub mod scoring;

use tracing_subscriber::EnvFilter;

/// Opt-in tracing initialization for binaries and tests embedding this crate.
/// Honors `RUST_LOG` when set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("HealthAssess starting v{}", config::APP_VERSION);
}
