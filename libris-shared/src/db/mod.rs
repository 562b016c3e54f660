/// Database layer for Libris
///
/// This module provides connection pooling and schema bootstrap.
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with health checks
/// - `schema`: Database file and table creation on startup
/// - Models are in the `models` module at crate root level
///
/// # Example
///
/// ```no_run
/// use libris_shared::db::pool::{create_pool, DatabaseConfig};
/// use libris_shared::db::schema::ensure_schema;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: "sqlite://data/library.sqlite".to_string(),
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     ensure_schema(&pool).await?;
///     Ok(())
/// }
/// ```

pub mod pool;
pub mod schema;
