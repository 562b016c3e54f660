/// Book model and database operations
///
/// Every book belongs to exactly one author. The listing query always joins
/// the author so the catalog page can show the author's name next to the
/// title.
///
/// # Schema
///
/// ```sql
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
/// use libris_shared::models::book::{Book, CreateBook, SortOrder};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool, author_id: i64) -> Result<(), sqlx::Error> {
/// Book::create(
///     &pool,
///     CreateBook {
///         isbn: "9780142437179".to_string(),
///         title: "Adventures of Huckleberry Finn".to_string(),
///         publication_year: Some(1884),
///         author_id,
///     },
/// )
/// .await?;
///
/// for book in Book::list(&pool, SortOrder::Author).await? {
///     println!("{} by {}", book.title, book.author_name);
/// }
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Maximum length of an ISBN, matching the column width
pub const ISBN_MAX_LEN: usize = 20;

/// Maximum length of a title, matching the column width
pub const TITLE_MAX_LEN: usize = 300;

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    /// Row id, assigned by the database
    pub id: i64,

    /// ISBN, unique across all books
    pub isbn: String,

    pub title: String,

    pub publication_year: Option<i32>,

    /// Owning author
    pub author_id: i64,
}

/// Input for creating a new book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBook {
    pub isbn: String,
    pub title: String,
    pub publication_year: Option<i32>,
    pub author_id: i64,
}

/// A book joined with its author's name, as shown on the catalog page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BookListing {
    pub id: i64,
    pub isbn: String,
    pub title: String,
    pub publication_year: Option<i32>,
    pub author_id: i64,
    pub author_name: String,
}

/// Ordering of the book listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Title ascending
    #[default]
    Title,

    /// Author name ascending, then title ascending
    Author,
}

impl SortOrder {
    /// Parses the `sort` query value
    ///
    /// Only `"author"` selects author order; anything else, including a
    /// missing value, falls back to title order.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("author") => SortOrder::Author,
            _ => SortOrder::Title,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Title => "title",
            SortOrder::Author => "author",
        }
    }

    fn order_by_clause(&self) -> &'static str {
        match self {
            SortOrder::Title => "b.title ASC",
            SortOrder::Author => "a.name ASC, b.title ASC",
        }
    }
}

impl Book {
    /// Inserts a new book and returns the stored row
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ISBN already exists (unique violation)
    /// - `author_id` does not reference an author (foreign key violation)
    pub async fn create(pool: &SqlitePool, data: CreateBook) -> Result<Self, sqlx::Error> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (isbn, title, publication_year, author_id)
            VALUES (?, ?, ?, ?)
            RETURNING id, isbn, title, publication_year, author_id
            "#,
        )
        .bind(data.isbn)
        .bind(data.title)
        .bind(data.publication_year)
        .bind(data.author_id)
        .fetch_one(pool)
        .await?;

        Ok(book)
    }

    /// Finds a book by exact ISBN
    pub async fn find_by_isbn(pool: &SqlitePool, isbn: &str) -> Result<Option<Self>, sqlx::Error> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, isbn, title, publication_year, author_id FROM books WHERE isbn = ?",
        )
        .bind(isbn)
        .fetch_optional(pool)
        .await?;

        Ok(book)
    }

    /// Lists every book with its author's name in the requested order
    pub async fn list(pool: &SqlitePool, order: SortOrder) -> Result<Vec<BookListing>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT b.id, b.isbn, b.title, b.publication_year, b.author_id,
                   a.name AS author_name
            FROM books b
            JOIN authors a ON a.id = b.author_id
            ORDER BY {}
            "#,
            order.order_by_clause()
        );

        let books = sqlx::query_as::<_, BookListing>(&query)
            .fetch_all(pool)
            .await?;

        Ok(books)
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_from_param() {
        assert_eq!(SortOrder::from_param(Some("author")), SortOrder::Author);
        assert_eq!(SortOrder::from_param(Some("title")), SortOrder::Title);
        assert_eq!(SortOrder::from_param(None), SortOrder::Title);
        assert_eq!(SortOrder::from_param(Some("")), SortOrder::Title);
        assert_eq!(SortOrder::from_param(Some("Author")), SortOrder::Title);
        assert_eq!(SortOrder::from_param(Some("year")), SortOrder::Title);
    }

    #[test]
    fn test_sort_order_as_str() {
        assert_eq!(SortOrder::Title.as_str(), "title");
        assert_eq!(SortOrder::Author.as_str(), "author");
        assert_eq!(SortOrder::default(), SortOrder::Title);
    }
}
