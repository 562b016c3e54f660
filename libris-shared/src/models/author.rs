/// Author model and database operations
///
/// Authors own books: deleting an author deletes their books through the
/// `ON DELETE CASCADE` reference on `books.author_id`.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE authors (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name VARCHAR(200) NOT NULL UNIQUE,
///     birth_date DATE,
///     date_of_death DATE
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use libris_shared::models::author::{Author, CreateAuthor};
/// use libris_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::in_memory()).await?;
///
/// let author = Author::create(
///     &pool,
///     CreateAuthor {
///         name: "Mark Twain".to_string(),
///         birth_date: None,
///         date_of_death: None,
///     },
/// )
/// .await?;
///
/// let found = Author::find_by_name(&pool, "Mark Twain").await?;
/// assert_eq!(found.map(|a| a.id), Some(author.id));
/// # Ok(())
/// # }
/// ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Maximum length of an author name, matching the column width
pub const NAME_MAX_LEN: usize = 200;

/// A person who wrote one or more books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Author {
    /// Row id, assigned by the database
    pub id: i64,

    /// Display name, unique across all authors
    pub name: String,

    pub birth_date: Option<NaiveDate>,

    pub date_of_death: Option<NaiveDate>,
}

/// Input for creating a new author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAuthor {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Inserts a new author and returns the stored row
    ///
    /// # Errors
    ///
    /// Returns a unique violation if the name is already taken.
    pub async fn create(pool: &SqlitePool, data: CreateAuthor) -> Result<Self, sqlx::Error> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (name, birth_date, date_of_death)
            VALUES (?, ?, ?)
            RETURNING id, name, birth_date, date_of_death
            "#,
        )
        .bind(data.name)
        .bind(data.birth_date)
        .bind(data.date_of_death)
        .fetch_one(pool)
        .await?;

        Ok(author)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let author = sqlx::query_as::<_, Author>(
            "SELECT id, name, birth_date, date_of_death FROM authors WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(author)
    }

    /// Finds an author by exact name
    ///
    /// The comparison is case-sensitive: "mark twain" does not match "Mark Twain".
    pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Self>, sqlx::Error> {
        let author = sqlx::query_as::<_, Author>(
            "SELECT id, name, birth_date, date_of_death FROM authors WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(author)
    }

    /// Lists all authors ordered by name ascending
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let authors = sqlx::query_as::<_, Author>(
            "SELECT id, name, birth_date, date_of_death FROM authors ORDER BY name ASC",
        )
        .fetch_all(pool)
        .await?;

        Ok(authors)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Deletes an author together with all of their books
    ///
    /// # Returns
    ///
    /// true if an author was deleted, false if no author had this id
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
