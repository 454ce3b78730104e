//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, state construction, and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::ExpiringStore;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::{AppState, ShortUrlSettings};
use crate::utils::code_generator::RandomIdGenerator;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// How often the in-memory store drops entries past their TTL.
const MEMORY_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Connects the store selected by the configuration.
///
/// With a Redis URL the connection must succeed; there is no silent fallback
/// once Redis has been asked for. Without one, an in-memory store is used
/// and swept for expired entries in the background.
///
/// # Errors
///
/// Returns an error if Redis is configured but unreachable.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn ExpiringStore>> {
    match config.redis_url {
        Some(ref redis_url) => {
            let store = RedisStore::connect(
                redis_url,
                config.store_timeout(),
                config.store_key_prefix.clone(),
            )
            .await
            .context("Failed to connect to Redis")?;
            tracing::info!("Store enabled (Redis)");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("No Redis configured, using in-memory store; links are lost on restart");
            let store = Arc::new(MemoryStore::new());
            store.spawn_sweeper(MEMORY_SWEEP_INTERVAL);
            Ok(store)
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Expiring store (Redis or in-memory)
/// - Mapping services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;

    let state = AppState::new(
        store,
        Arc::new(RandomIdGenerator),
        ShortUrlSettings {
            base_url: config.base_url.clone(),
            behind_proxy: config.behind_proxy,
        },
    );

    let app = app_router(state, &config.cors_allowed_origins);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting server on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
