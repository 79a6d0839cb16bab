//! Fast Clipboard - A minimal networked clipboard
//!
//! Server binary: loads configuration, connects the store and serves the API.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fast_clipboard::api::create_router;
use fast_clipboard::config::StoreBackend;
use fast_clipboard::store::{ClipboardStore, MemoryStore, RedisStore};
use fast_clipboard::{spawn_cleanup_task, AppState, Config};

/// Main entry point for the clipboard server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load and validate configuration from environment variables
/// 3. Create the store handle and run a health check (non-fatal)
/// 4. Start background TTL cleanup task for the memory backend
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fast_clipboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Fast Clipboard Server");

    let config = Config::from_env().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    info!(
        "Configuration loaded: backend={:?}, store={}:{}, max_content_size={}, ttl={}s, port={}",
        config.store_backend,
        config.store_host,
        config.store_port,
        config.max_content_size,
        config.ttl_seconds,
        config.server_port
    );

    let (store, cleanup_handle) = build_store(&config).await?;

    let state = AppState::from_config(store, &config);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Creates the configured store. An unreachable Redis server is logged and
/// the server starts anyway; requests report the store as unavailable until
/// it comes back.
async fn build_store(
    config: &Config,
) -> anyhow::Result<(Arc<dyn ClipboardStore>, Option<JoinHandle<()>>)> {
    match config.store_backend {
        StoreBackend::Redis => {
            let store = RedisStore::from_config(config).context("invalid store address")?;
            match store.ping().await {
                Ok(()) => info!("Store health check passed"),
                Err(err) => error!("Store health check failed, continuing degraded: {}", err),
            }
            let store: Arc<dyn ClipboardStore> = Arc::new(store);
            Ok((store, None))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory store; entries are lost on restart");
            let store = Arc::new(MemoryStore::new());
            let handle = spawn_cleanup_task(store.clone(), config.cleanup_interval);
            let store: Arc<dyn ClipboardStore> = store;
            Ok((store, Some(handle)))
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task if one is running.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
