/// Schema bootstrap
///
/// Libris has no migration history: the two catalog tables are created on
/// startup when they are absent, and left untouched when they exist.
///
/// # Tables
///
/// ```sql
/// CREATE TABLE authors (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name VARCHAR(200) NOT NULL UNIQUE,
///     birth_date DATE,
///     date_of_death DATE
/// );
///
/// CREATE TABLE books (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     isbn VARCHAR(20) NOT NULL UNIQUE,
///     title VARCHAR(300) NOT NULL,
///     publication_year INTEGER,
///     author_id INTEGER NOT NULL REFERENCES authors(id) ON DELETE CASCADE
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use libris_shared::db::pool::{create_pool, DatabaseConfig};
/// use libris_shared::db::schema::{ensure_database_exists, ensure_schema};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let url = "sqlite://data/library.sqlite";
/// ensure_database_exists(url).await?;
///
/// let pool = create_pool(DatabaseConfig { url: url.to_string(), ..Default::default() }).await?;
/// ensure_schema(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePool, Sqlite};
use std::path::Path;
use tracing::{debug, info};

const CREATE_AUTHORS: &str = r#"
    CREATE TABLE IF NOT EXISTS authors (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(200) NOT NULL UNIQUE,
        birth_date DATE,
        date_of_death DATE
    )
"#;

const CREATE_BOOKS: &str = r#"
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        isbn VARCHAR(20) NOT NULL UNIQUE,
        title VARCHAR(300) NOT NULL,
        publication_year INTEGER,
        author_id INTEGER NOT NULL REFERENCES authors(id) ON DELETE CASCADE
    )
"#;

const CREATE_BOOKS_AUTHOR_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_books_author_id ON books (author_id)";

/// Which catalog tables are present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaStatus {
    /// Whether the `authors` table exists
    pub authors_table: bool,

    /// Whether the `books` table exists
    pub books_table: bool,
}

impl SchemaStatus {
    /// Both tables exist
    pub fn is_complete(&self) -> bool {
        self.authors_table && self.books_table
    }
}

/// Creates the catalog tables if they do not exist yet
///
/// Statements run inside one transaction, so a failure leaves no
/// half-created schema behind.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Ensuring catalog schema");

    let mut tx = pool.begin().await?;
    for statement in [CREATE_AUTHORS, CREATE_BOOKS, CREATE_BOOKS_AUTHOR_INDEX] {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    info!("Catalog schema ready");
    Ok(())
}

/// Reports which catalog tables exist
pub async fn get_schema_status(pool: &SqlitePool) -> Result<SchemaStatus, sqlx::Error> {
    debug!("Checking schema status");

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('authors', 'books')",
    )
    .fetch_all(pool)
    .await?;

    let status = SchemaStatus {
        authors_table: tables.iter().any(|t| t == "authors"),
        books_table: tables.iter().any(|t| t == "books"),
    };

    debug!(?status, "Schema status retrieved");
    Ok(status)
}

/// Creates the database file (and its parent directory) if it doesn't exist
///
/// In-memory URLs are left alone.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    info!("Checking if database exists");

    if let Some(parent) = database_file(database_url).and_then(Path::parent) {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!(directory = %parent.display(), "Creating database directory");
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    if !Sqlite::database_exists(database_url).await? {
        info!("Database does not exist, creating it");
        Sqlite::create_database(database_url).await?;
        info!("Database created successfully");
    } else {
        debug!("Database already exists");
    }

    Ok(())
}

/// Extracts the file path from a `sqlite:` URL, `None` for in-memory databases
fn database_file(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);

    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(Path::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::{create_pool, DatabaseConfig};

    #[test]
    fn test_database_file_from_url() {
        assert_eq!(
            database_file("sqlite://data/library.sqlite"),
            Some(Path::new("data/library.sqlite"))
        );
        assert_eq!(
            database_file("sqlite:library.sqlite?mode=rwc"),
            Some(Path::new("library.sqlite"))
        );
        assert_eq!(database_file("sqlite::memory:"), None);
        assert_eq!(database_file("postgres://localhost/db"), None);
    }

    #[tokio::test]
    async fn test_ensure_schema_creates_tables() {
        let pool = create_pool(DatabaseConfig::in_memory()).await.unwrap();

        let before = get_schema_status(&pool).await.unwrap();
        assert!(!before.authors_table);
        assert!(!before.books_table);

        ensure_schema(&pool).await.unwrap();

        let after = get_schema_status(&pool).await.unwrap();
        assert!(after.is_complete());
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let pool = create_pool(DatabaseConfig::in_memory()).await.unwrap();

        ensure_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO authors (name) VALUES ('Mark Twain')")
            .execute(&pool)
            .await
            .unwrap();
        ensure_schema(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
