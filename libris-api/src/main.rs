//! # Libris Web Server
//!
//! Serves the library catalog: a sortable book list and forms for adding
//! authors and books, backed by a SQLite database.
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=sqlite://data/library.sqlite cargo run -p libris-api
//! ```
//!
//! The database file and its tables are created on first start.

use libris_api::{
    app::{build_router, AppState},
    config::Config,
};
use libris_shared::{
    catalog::SqlCatalog,
    db::{
        pool::{close_pool, create_pool},
        schema::{ensure_database_exists, ensure_schema, get_schema_status},
    },
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    let json = config.log.json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "libris_api=debug,libris_shared=debug,tower_http=debug".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!(
        "Libris server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    ensure_database_exists(&config.database.url).await?;
    let pool = create_pool(config.pool_config()).await?;
    ensure_schema(&pool).await?;
    let schema = get_schema_status(&pool).await?;
    if !schema.is_complete() {
        anyhow::bail!("Catalog tables missing after schema bootstrap: {:?}", schema);
    }

    let catalog = Arc::new(SqlCatalog::new(pool.clone()));
    let bind_address = config.bind_address();
    let app = build_router(AppState::new(catalog, config));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    close_pool(pool).await;
    tracing::info!("Graceful shutdown complete");

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl-C, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
