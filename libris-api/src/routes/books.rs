/// Book endpoints
///
/// # Endpoints
///
/// - `GET /` - Catalog listing, `?sort=title` (default) or `?sort=author`
/// - `GET /add_book` - Form with the author selection list
/// - `POST /add_book` - Validate and insert a book
///
/// # Validation order
///
/// 1. At least one author must exist
/// 2. ISBN, title and author selection must be non-empty after trimming
/// 3. ISBN and title must fit their columns
/// 4. ISBN must not belong to an existing book
/// 5. Publication year, when given, must be a whole number
/// 6. The selected author must exist

use crate::{
    app::AppState,
    error::ApiResult,
    forms::{
        first_value, outcome_flash, parse_optional_year, BookForm, FieldPairs, FormError,
        BOOK_ADDED,
    },
    views::{
        books::{add_book_page, home_page},
        Flash,
    },
};
use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    Form,
};
use libris_shared::{
    catalog::Catalog,
    models::book::{Book, CreateBook, SortOrder},
};
use maud::Markup;
use validator::Validate;

/// Lists every book in the requested order
///
/// Only the first `sort` value counts. Unknown values and unreadable query
/// strings fall back to title order.
pub async fn list_books(
    State(state): State<AppState>,
    query: Result<Query<FieldPairs>, QueryRejection>,
) -> ApiResult<Markup> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Ignoring unreadable query string");
            FieldPairs::new()
        }
    };
    let sort = SortOrder::from_param(first_value(&pairs, "sort"));
    let books = state.catalog.list_books(sort).await?;
    Ok(home_page(&books, sort))
}

/// Shows the add-book form
pub async fn book_form(State(state): State<AppState>) -> ApiResult<Markup> {
    let authors = state.catalog.list_authors().await?;
    Ok(add_book_page(&authors, &Flash::default()))
}

/// Handles a submitted add-book form
///
/// The form is redisplayed with the current author list in every case
/// except a database failure.
pub async fn create_book(
    State(state): State<AppState>,
    form: Result<Form<FieldPairs>, FormRejection>,
) -> ApiResult<Markup> {
    let Form(pairs) = form?;
    let result = submit_book(state.catalog.as_ref(), BookForm::from_pairs(&pairs)).await;
    let flash = outcome_flash(result, BOOK_ADDED)?;
    let authors = state.catalog.list_authors().await?;
    Ok(add_book_page(&authors, &flash))
}

/// Validates a submitted book and inserts it
pub async fn submit_book(catalog: &dyn Catalog, form: BookForm) -> Result<Book, FormError> {
    if catalog.count_authors().await? == 0 {
        return Err(FormError::NoAuthors);
    }

    let form = form.trimmed();

    if form.isbn.is_empty() || form.title.is_empty() || form.author_id.is_empty() {
        return Err(FormError::MissingBookFields);
    }

    form.validate()
        .map_err(|errors| FormError::from_validation(&errors, &["isbn", "title"]))?;

    if catalog.find_book_by_isbn(&form.isbn).await?.is_some() {
        return Err(FormError::DuplicateIsbn);
    }

    let publication_year = parse_optional_year(&form.publication_year)
        .map_err(|_| FormError::InvalidPublicationYear)?;

    let author_id: i64 = form
        .author_id
        .parse()
        .map_err(|_| FormError::UnknownAuthor)?;
    if catalog.find_author_by_id(author_id).await?.is_none() {
        return Err(FormError::UnknownAuthor);
    }

    let data = CreateBook {
        isbn: form.isbn,
        title: form.title,
        publication_year,
        author_id,
    };

    catalog.insert_book(data).await.map_err(|err| match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            FormError::DuplicateIsbn
        }
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            FormError::UnknownAuthor
        }
        other => FormError::Store(other),
    })
}
