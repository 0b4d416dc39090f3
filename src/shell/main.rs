use anyhow::Context;

use user_registry::shell::config::AppConfig;
use user_registry::shell::http::router;
use user_registry::shell::state::AppState;
use user_registry::shell::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let app = router(AppState::from_profile(&config.profile));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(
        profile = %config.profile.name,
        "users endpoint: http://{}/api/users",
        config.bind_addr
    );
    axum::serve(listener, app).await?;
    Ok(())
}
