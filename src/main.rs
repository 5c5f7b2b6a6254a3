use anyhow::Context;
use taskboard::{
    handler::{self, AppState},
    Config,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("invalid configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let storage = config
        .backend
        .open(&config.data_dir)
        .await
        .with_context(|| format!("failed to open {:?} storage", config.backend))?;
    tracing::info!(
        backend = ?config.backend,
        data_dir = %config.data_dir.display(),
        "storage ready"
    );

    let app = handler::router(AppState::new(storage));
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "taskboard listening");
    axum::serve(listener, app).await.context("server failed")?;

    Ok(())
}
