use anyhow::Context;
use gateway::{router, AppState, Config};
use item_core::UreqTransport;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    if config.naver_credentials.is_none() {
        tracing::warn!("NAVER_CLIENT_ID and NAVER_CLIENT_SECRET are not set; /api/search is disabled");
    }
    let state = AppState::new(&config, UreqTransport::new());

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(
        addr = %config.listen_addr,
        server = %config.server_base_url,
        naver = %config.naver_base_url,
        "gateway listening"
    );
    axum::serve(listener, router(state)).await?;
    Ok(())
}
