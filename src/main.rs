mod cache;
mod completion;
mod config;
mod error;
mod handlers;
mod metrics;
mod models;
mod prompt;
mod prompt_info;
mod state;

use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::cache::{MemoryCache, RedisCache, ReplyCache};
use crate::completion::OpenAiClient;
use crate::config::{Args, CacheBackend};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // parse cli arguments
    let args = Args::parse();
    args.validate()?;
    let addr = args.socket_addr()?;

    let cache: Arc<dyn ReplyCache> = match args.cache_backend {
        CacheBackend::Redis => Arc::new(RedisCache::connect(&args.redis_url).await?),
        CacheBackend::Memory => {
            tracing::warn!("Using in-process cache, replies are lost on restart");
            Arc::new(MemoryCache::new())
        }
    };

    let completion = Arc::new(OpenAiClient::new(
        reqwest::Client::new(),
        &args.openai_base_url,
        args.openai_api_key.clone(),
    ));

    let state = Arc::new(AppState::new(
        cache,
        completion,
        args.model.clone(),
        args.prompt_version,
        Duration::from_secs(args.cache_ttl),
    ));

    let app = handlers::router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        addr = %addr,
        model = %args.model,
        prompt_version = ?args.prompt_version,
        cache_backend = ?args.cache_backend,
        cache_ttl_secs = args.cache_ttl,
        "Fitness chat gateway running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
