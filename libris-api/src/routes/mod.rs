/// Route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `books`: Catalog listing and the add-book form
/// - `authors`: Add-author form
/// - `health`: Health check endpoint

pub mod authors;
pub mod books;
pub mod health;

use crate::error::ApiError;

/// Fallback for unknown paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound("The requested page does not exist.".to_string())
}
