/// Database models for Libris
///
/// This module contains the catalog models and their queries.
///
/// # Models
///
/// - `author`: Authors, unique by name; own their books
/// - `book`: Books, unique by ISBN; the listing read model and sort order
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
/// let new_author = CreateAuthor {
///     name: "Mark Twain".to_string(),
///     birth_date: None,
///     date_of_death: None,
/// };
///
/// let author = Author::create(&pool, new_author).await?;
/// # Ok(())
/// # }
/// ```

pub mod author;
pub mod book;
