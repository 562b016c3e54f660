/// Catalog gateway
///
/// Request handlers never touch the pool directly; they go through the
/// `Catalog` trait, which is constructed at startup and injected into the
/// router state. `SqlCatalog` is the SQLite-backed implementation.
///
/// # Contract
///
/// - Every insert is a single statement and commits on its own.
/// - Uniqueness of author names and ISBNs is enforced by the store; a
///   duplicate insert fails with a unique violation.
/// - `insert_book` fails with a foreign key violation when the author is
///   missing.
/// - `delete_author` removes the author's books as well.
///
/// # Example
///
/// ```no_run
/// use libris_shared::catalog::{Catalog, SqlCatalog};
/// use libris_shared::models::book::SortOrder;
/// use sqlx::SqlitePool;
/// use std::sync::Arc;
///
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let catalog: Arc<dyn Catalog> = Arc::new(SqlCatalog::new(pool));
/// let books = catalog.list_books(SortOrder::Author).await?;
/// println!("{} books", books.len());
/// # Ok(())
/// # }
/// ```

use crate::db::pool::{self, PoolStats};
use crate::models::{
    author::{Author, CreateAuthor},
    book::{Book, BookListing, CreateBook, SortOrder},
};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Reads and writes of catalog entities
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Verifies the underlying store answers
    async fn ping(&self) -> Result<(), sqlx::Error>;

    /// Connection usage of the underlying store
    fn pool_stats(&self) -> PoolStats;

    async fn find_author_by_name(&self, name: &str) -> Result<Option<Author>, sqlx::Error>;

    async fn find_author_by_id(&self, id: i64) -> Result<Option<Author>, sqlx::Error>;

    /// All authors, ordered by name ascending
    async fn list_authors(&self) -> Result<Vec<Author>, sqlx::Error>;

    async fn count_authors(&self) -> Result<i64, sqlx::Error>;

    async fn insert_author(&self, data: CreateAuthor) -> Result<Author, sqlx::Error>;

    /// Deletes an author and, by cascade, all of their books
    async fn delete_author(&self, id: i64) -> Result<bool, sqlx::Error>;

    async fn find_book_by_isbn(&self, isbn: &str) -> Result<Option<Book>, sqlx::Error>;

    /// Every book joined with its author's name, in the given order
    async fn list_books(&self, order: SortOrder) -> Result<Vec<BookListing>, sqlx::Error>;

    async fn insert_book(&self, data: CreateBook) -> Result<Book, sqlx::Error>;
}

/// SQLite-backed catalog
#[derive(Debug, Clone)]
pub struct SqlCatalog {
    pool: SqlitePool,
}

impl SqlCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The underlying pool, for shutdown and diagnostics
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Catalog for SqlCatalog {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        pool::health_check(&self.pool).await
    }

    fn pool_stats(&self) -> PoolStats {
        pool::get_pool_stats(&self.pool)
    }

    async fn find_author_by_name(&self, name: &str) -> Result<Option<Author>, sqlx::Error> {
        Author::find_by_name(&self.pool, name).await
    }

    async fn find_author_by_id(&self, id: i64) -> Result<Option<Author>, sqlx::Error> {
        Author::find_by_id(&self.pool, id).await
    }

    async fn list_authors(&self) -> Result<Vec<Author>, sqlx::Error> {
        Author::list(&self.pool).await
    }

    async fn count_authors(&self) -> Result<i64, sqlx::Error> {
        Author::count(&self.pool).await
    }

    async fn insert_author(&self, data: CreateAuthor) -> Result<Author, sqlx::Error> {
        let author = Author::create(&self.pool, data).await?;
        tracing::info!(author_id = author.id, name = %author.name, "Author created");
        Ok(author)
    }

    async fn delete_author(&self, id: i64) -> Result<bool, sqlx::Error> {
        let deleted = Author::delete(&self.pool, id).await?;
        if deleted {
            tracing::info!(author_id = id, "Author and their books deleted");
        }
        Ok(deleted)
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> Result<Option<Book>, sqlx::Error> {
        Book::find_by_isbn(&self.pool, isbn).await
    }

    async fn list_books(&self, order: SortOrder) -> Result<Vec<BookListing>, sqlx::Error> {
        tracing::debug!(order = order.as_str(), "Listing books");
        Book::list(&self.pool, order).await
    }

    async fn insert_book(&self, data: CreateBook) -> Result<Book, sqlx::Error> {
        let book = Book::create(&self.pool, data).await?;
        tracing::info!(book_id = book.id, isbn = %book.isbn, author_id = book.author_id, "Book created");
        Ok(book)
    }
}
