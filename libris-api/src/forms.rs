/// Form input and validation outcomes
///
/// The add-author and add-book pages post urlencoded forms. Every field is
/// read as a string (absent fields become empty, a repeated field keeps its
/// first value), trimmed, and checked in a fixed order. The first failing check becomes a `FormError`, whose
/// `Display` text is the message shown above the form.
///
/// `FormError::Store` is the one variant that is not a user mistake: it
/// carries a database failure and surfaces as an error page instead of an
/// inline message.

use crate::error::{ApiError, ApiResult};
use crate::views::Flash;
use chrono::NaiveDate;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Date format of `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const AUTHOR_ADDED: &str = "Author added successfully.";
pub const BOOK_ADDED: &str = "Book added successfully.";

/// Decoded urlencoded pairs, in the order they were sent
pub type FieldPairs = Vec<(String, String)>;

/// First value sent for `key`
pub fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

fn field(pairs: &[(String, String)], key: &str) -> String {
    first_value(pairs, key).unwrap_or_default().to_string()
}

/// Why a submitted form was rejected
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Name is required.")]
    NameRequired,

    #[error("Author already exists.")]
    DuplicateAuthor,

    #[error("{0} must be a date in YYYY-MM-DD format.")]
    InvalidDate(&'static str),

    #[error("Please add at least one author first.")]
    NoAuthors,

    #[error("ISBN, title and author are required.")]
    MissingBookFields,

    #[error("This ISBN already exists.")]
    DuplicateIsbn,

    #[error("Publication year must be a whole number.")]
    InvalidPublicationYear,

    #[error("The selected author does not exist.")]
    UnknownAuthor,

    /// A field failed a declarative rule (currently maximum lengths)
    #[error("{0}")]
    Invalid(String),

    #[error("database: {0}")]
    Store(#[from] sqlx::Error),
}

impl FormError {
    /// Picks the message of the first failing field, in the given field order
    pub fn from_validation(errors: &ValidationErrors, field_order: &[&str]) -> Self {
        let field_errors = errors.field_errors();
        let message = field_order
            .iter()
            .filter_map(|field| field_errors.get(*field))
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid input.".to_string());

        FormError::Invalid(message)
    }
}

/// Turns a submission result into the message shown with the redisplayed form
///
/// Database failures are passed on as `ApiError` so they render as an error page.
pub fn outcome_flash<T>(result: Result<T, FormError>, success: &str) -> ApiResult<Flash> {
    match result {
        Ok(_) => Ok(Flash::success(success)),
        Err(FormError::Store(err)) => Err(ApiError::from(err)),
        Err(err) => {
            tracing::warn!(reason = %err, "Form submission rejected");
            Ok(Flash::error(err.to_string()))
        }
    }
}

/// Fields posted to `/add_author`
#[derive(Debug, Clone, Default, Validate)]
pub struct AuthorForm {
    #[validate(length(max = 200, message = "Name must be at most 200 characters."))]
    pub name: String,

    /// `YYYY-MM-DD`, empty when unknown
    pub birth_date: String,

    /// `YYYY-MM-DD`, empty when unknown
    pub date_of_death: String,
}

impl AuthorForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            name: field(pairs, "name"),
            birth_date: field(pairs, "birth_date"),
            date_of_death: field(pairs, "date_of_death"),
        }
    }

    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            birth_date: self.birth_date.trim().to_string(),
            date_of_death: self.date_of_death.trim().to_string(),
        }
    }
}

/// Fields posted to `/add_book`
#[derive(Debug, Clone, Default, Validate)]
pub struct BookForm {
    #[validate(length(max = 20, message = "ISBN must be at most 20 characters."))]
    pub isbn: String,

    #[validate(length(max = 300, message = "Title must be at most 300 characters."))]
    pub title: String,

    pub publication_year: String,

    /// Id of the author picked in the selection list
    pub author_id: String,
}

impl BookForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            isbn: field(pairs, "isbn"),
            title: field(pairs, "title"),
            publication_year: field(pairs, "publication_year"),
            author_id: field(pairs, "author_id"),
        }
    }

    pub fn trimmed(self) -> Self {
        Self {
            isbn: self.isbn.trim().to_string(),
            title: self.title.trim().to_string(),
            publication_year: self.publication_year.trim().to_string(),
            author_id: self.author_id.trim().to_string(),
        }
    }
}

/// Parses an optional `YYYY-MM-DD` date; empty input means no date
pub fn parse_optional_date(value: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map(Some)
}

/// Parses an optional year; empty input means no year
pub fn parse_optional_year(value: &str) -> Result<Option<i32>, std::num::ParseIntError> {
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some)
}
