/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - A fresh in-memory catalog per test
/// - The full router built on top of it
/// - Request helpers returning status and body

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use libris_api::app::{build_router, AppState};
use libris_api::config::Config;
use libris_shared::catalog::{Catalog, SqlCatalog};
use libris_shared::db::pool::{create_pool, DatabaseConfig};
use libris_shared::db::schema::ensure_schema;
use libris_shared::models::author::{Author, CreateAuthor};
use std::sync::Arc;
use tower::Service as _;

/// Test context containing all necessary resources
pub struct TestContext {
    pub catalog: Arc<SqlCatalog>,
    pub app: axum::Router,
    pub config: Config,
}

/// A buffered response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestContext {
    /// Creates a new test context with an empty in-memory database
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_lookup(|key| match key {
            "DATABASE_URL" => Some("sqlite::memory:".to_string()),
            _ => None,
        })?;

        let pool = create_pool(DatabaseConfig::in_memory()).await?;
        ensure_schema(&pool).await?;

        let catalog = Arc::new(SqlCatalog::new(pool));
        let state = AppState::new(catalog.clone(), config.clone());
        let app = build_router(state);

        Ok(TestContext {
            catalog,
            app,
            config,
        })
    }

    /// Sends a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    /// Sends a urlencoded form POST
    pub async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Sends an arbitrary request
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().call(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        }
    }

    /// Inserts an author directly through the catalog
    pub async fn add_author(&self, name: &str) -> Author {
        self.catalog
            .insert_author(CreateAuthor {
                name: name.to_string(),
                birth_date: None,
                date_of_death: None,
            })
            .await
            .unwrap()
    }
}
