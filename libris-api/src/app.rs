/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use libris_api::{app::AppState, config::Config};
/// use libris_shared::{catalog::SqlCatalog, db::pool::create_pool};
/// use std::sync::Arc;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(config.pool_config()).await?;
/// let state = AppState::new(Arc::new(SqlCatalog::new(pool)), config);
/// let app = libris_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, middleware::security::SecurityHeadersLayer, routes};
use axum::{routing::get, Router};
use libris_shared::catalog::Catalog;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Catalog gateway
    pub catalog: Arc<dyn Catalog>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(catalog: Arc<dyn Catalog>, config: Config) -> Self {
        Self {
            catalog,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Routes
///
/// ```text
/// /
/// ├── GET  /              # Book list (?sort=title|author)
/// ├── GET  /add_author    # Add-author form
/// ├── POST /add_author
/// ├── GET  /add_book      # Add-book form
/// ├── POST /add_book
/// └── GET  /health        # Health check (JSON)
/// ```
///
/// Any other path renders the 404 page.
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. Security headers
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(routes::books::list_books))
        .route(
            "/add_author",
            get(routes::authors::author_form).post(routes::authors::create_author),
        )
        .route(
            "/add_book",
            get(routes::books::book_form).post(routes::books::create_book),
        );

    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    Router::new()
        .merge(page_routes)
        .merge(health_routes)
        .fallback(routes::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SecurityHeadersLayer::new(state.config.api.production))
        .with_state(state)
}
