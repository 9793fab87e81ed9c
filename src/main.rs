use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::ServerConfig;
use mergington::{build_router, ActivityStore};

const BUILD_ID: &str = env!("MERGINGTON_BUILD_ID");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env();

    let store = ActivityStore::seeded();
    info!(activities = store.len(), "activity directory seeded");

    let app = build_router(store, &config.static_dir);

    let listener = bind_with_fallback(&config).await?;
    let bound_addr = listener.local_addr().context("listener has no local address")?;
    info!(
        address = %bound_addr,
        static_dir = %config.static_dir.display(),
        build_id = BUILD_ID,
        "server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server stopped with an error")?;

    info!("server stopped");
    Ok(())
}

async fn bind_with_fallback(config: &ServerConfig) -> anyhow::Result<TcpListener> {
    let addr = config.socket_addr()?;
    match TcpListener::bind(addr).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind {addr} or {fallback}"))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not install ctrl-c handler");
        std::future::pending::<()>().await;
    }
}
