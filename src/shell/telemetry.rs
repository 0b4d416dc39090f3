use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global fmt subscriber. Directives come from `RUST_LOG`,
/// falling back to `info`. Calling it twice keeps the first subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = fmt().with_env_filter(filter).with_target(true).try_init() {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}
