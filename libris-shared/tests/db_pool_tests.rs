/// Integration tests for the database pool and schema bootstrap
///
/// These tests use throwaway SQLite files in a per-test `TempDir`, removed
/// when the test ends (pass or fail), so no database server is needed.
///
/// Run with: cargo test -p libris-shared --test db_pool_tests

use libris_shared::db::pool::{close_pool, create_pool, get_pool_stats, health_check, DatabaseConfig};
use libris_shared::db::schema::{ensure_database_exists, ensure_schema, get_schema_status};
use std::path::Path;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// URL of a database file inside a not-yet-existing `data` subdirectory
fn database_url(dir: &Path) -> String {
    format!("sqlite://{}/data/library.sqlite", dir.display())
}

#[tokio::test]
async fn test_ensure_database_exists_creates_directory_and_file() {
    let dir = temp_dir();
    let url = database_url(dir.path());

    ensure_database_exists(&url).await.expect("Failed to create database");

    assert!(
        dir.path().join("data/library.sqlite").exists(),
        "Database file should exist"
    );

    // Second call is a no-op
    ensure_database_exists(&url).await.expect("Second call should succeed");
}

#[tokio::test]
async fn test_create_pool_on_file() {
    let dir = temp_dir();
    let url = database_url(dir.path());
    ensure_database_exists(&url).await.unwrap();

    let config = DatabaseConfig {
        url,
        max_connections: 3,
        ..Default::default()
    };

    let pool = create_pool(config).await.expect("Failed to create pool");
    assert!(health_check(&pool).await.is_ok());

    let stats = get_pool_stats(&pool);
    assert!(stats.total_connections > 0, "Pool should have at least one connection");
    assert!(stats.total_connections <= 3, "Should not exceed max_connections");

    close_pool(pool).await;
}

#[tokio::test]
async fn test_create_pool_in_missing_directory() {
    let dir = temp_dir();
    let config = DatabaseConfig {
        url: database_url(&dir.path().join("missing")),
        connect_timeout_seconds: 2,
        ..Default::default()
    };

    let result = create_pool(config).await;
    assert!(result.is_err(), "Pool creation should not create parent directories");
}

#[tokio::test]
async fn test_schema_survives_reopen() {
    let dir = temp_dir();
    let url = database_url(dir.path());
    ensure_database_exists(&url).await.unwrap();

    let pool = create_pool(DatabaseConfig { url: url.clone(), ..Default::default() })
        .await
        .unwrap();
    ensure_schema(&pool).await.unwrap();
    sqlx::query("INSERT INTO authors (name) VALUES ('Mark Twain')")
        .execute(&pool)
        .await
        .unwrap();
    close_pool(pool).await;

    // Reopening runs the bootstrap again without touching existing rows
    let pool = create_pool(DatabaseConfig { url, ..Default::default() })
        .await
        .unwrap();
    ensure_schema(&pool).await.unwrap();

    let status = get_schema_status(&pool).await.unwrap();
    assert!(status.is_complete());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    close_pool(pool).await;
}

#[tokio::test]
async fn test_close_pool() {
    let pool = create_pool(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create pool");

    close_pool(pool.clone()).await;

    let result: Result<(i64,), _> = sqlx::query_as("SELECT 1").fetch_one(&pool).await;
    assert!(result.is_err(), "Queries should fail after pool is closed");
}
