use std::sync::Arc;

use anyhow::Context;

use potluck_api::{app, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("invalid configuration")?;
    potluck_observability::init(config.log_format);
    if let Some(ignored) = &config.ignored_log_format {
        tracing::warn!("{ignored}; using json logs");
    }

    let app = app::build_app(Arc::new(app::AppServices::new()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
