/// Add-author endpoints
///
/// # Endpoints
///
/// - `GET /add_author` - Empty form
/// - `POST /add_author` - Validate and insert an author
///
/// # Validation order
///
/// 1. Name must be non-empty after trimming
/// 2. Name must fit the column (200 characters)
/// 3. Birth date and date of death, when given, must be `YYYY-MM-DD`
/// 4. Name must not belong to an existing author
///
/// The first failure is shown on the redisplayed form; nothing is written.

use crate::{
    app::AppState,
    error::ApiResult,
    forms::{outcome_flash, parse_optional_date, AuthorForm, FieldPairs, FormError, AUTHOR_ADDED},
    views::{authors::add_author_page, Flash},
};
use axum::{
    extract::{rejection::FormRejection, State},
    Form,
};
use libris_shared::{
    catalog::Catalog,
    models::author::{Author, CreateAuthor},
};
use maud::Markup;
use validator::Validate;

/// Shows the empty add-author form
pub async fn author_form() -> Markup {
    add_author_page(&Flash::default())
}

/// Handles a submitted add-author form
///
/// Validation failures render the form with an error message and status 200.
/// Database failures render the error page.
pub async fn create_author(
    State(state): State<AppState>,
    form: Result<Form<FieldPairs>, FormRejection>,
) -> ApiResult<Markup> {
    let Form(pairs) = form?;
    let result = submit_author(state.catalog.as_ref(), AuthorForm::from_pairs(&pairs)).await;
    let flash = outcome_flash(result, AUTHOR_ADDED)?;
    Ok(add_author_page(&flash))
}

/// Validates a submitted author and inserts it
pub async fn submit_author(catalog: &dyn Catalog, form: AuthorForm) -> Result<Author, FormError> {
    let form = form.trimmed();

    if form.name.is_empty() {
        return Err(FormError::NameRequired);
    }

    form.validate()
        .map_err(|errors| FormError::from_validation(&errors, &["name"]))?;

    let birth_date = parse_optional_date(&form.birth_date)
        .map_err(|_| FormError::InvalidDate("Birth date"))?;
    let date_of_death = parse_optional_date(&form.date_of_death)
        .map_err(|_| FormError::InvalidDate("Date of death"))?;

    if catalog.find_author_by_name(&form.name).await?.is_some() {
        return Err(FormError::DuplicateAuthor);
    }

    let data = CreateAuthor {
        name: form.name,
        birth_date,
        date_of_death,
    };

    // A concurrent writer can still win between the check above and the insert
    catalog.insert_author(data).await.map_err(|err| match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            FormError::DuplicateAuthor
        }
        other => FormError::Store(other),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{test_catalog, StaleLookups};
    use chrono::NaiveDate;

    fn form(name: &str, birth_date: &str, date_of_death: &str) -> AuthorForm {
        AuthorForm {
            name: name.to_string(),
            birth_date: birth_date.to_string(),
            date_of_death: date_of_death.to_string(),
        }
    }

    #[tokio::test]
    async fn test_author_without_dates() {
        let catalog = test_catalog().await;

        let author = submit_author(&catalog, form("Mark Twain", "", "")).await.unwrap();

        assert_eq!(author.name, "Mark Twain");
        assert_eq!(author.birth_date, None);
        assert_eq!(author.date_of_death, None);
        assert_eq!(catalog.count_authors().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_author_with_dates_and_padding() {
        let catalog = test_catalog().await;

        let author = submit_author(&catalog, form("  Jane Austen ", "1775-12-16", "1817-07-18"))
            .await
            .unwrap();

        assert_eq!(author.name, "Jane Austen");
        assert_eq!(author.birth_date, NaiveDate::from_ymd_opt(1775, 12, 16));
        assert_eq!(author.date_of_death, NaiveDate::from_ymd_opt(1817, 7, 18));
    }

    #[tokio::test]
    async fn test_whitespace_name_rejected() {
        let catalog = test_catalog().await;

        let err = submit_author(&catalog, form("   ", "", "")).await.unwrap_err();

        assert!(matches!(err, FormError::NameRequired));
        assert_eq!(catalog.count_authors().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let catalog = test_catalog().await;
        submit_author(&catalog, form("Mark Twain", "", "")).await.unwrap();

        let err = submit_author(&catalog, form("Mark Twain ", "1835-11-30", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, FormError::DuplicateAuthor));
        assert_eq!(catalog.count_authors().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_name_required_checked_before_dates() {
        let catalog = test_catalog().await;

        let err = submit_author(&catalog, form("", "not-a-date", "")).await.unwrap_err();

        assert!(matches!(err, FormError::NameRequired));
    }

    #[tokio::test]
    async fn test_malformed_dates_rejected() {
        let catalog = test_catalog().await;

        let err = submit_author(&catalog, form("Mark Twain", "30.11.1835", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, FormError::InvalidDate("Birth date")));

        let err = submit_author(&catalog, form("Mark Twain", "", "1910-13-01"))
            .await
            .unwrap_err();
        assert!(matches!(err, FormError::InvalidDate("Date of death")));

        assert_eq!(catalog.count_authors().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_overlong_name_rejected() {
        let catalog = test_catalog().await;

        let err = submit_author(&catalog, form(&"x".repeat(201), "", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, FormError::Invalid(_)));
        assert_eq!(catalog.count_authors().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unique_violation_at_insert_maps_to_duplicate() {
        let catalog = StaleLookups(test_catalog().await);
        submit_author(&catalog.0, form("Mark Twain", "", "")).await.unwrap();

        let err = submit_author(&catalog, form("Mark Twain", "", "")).await.unwrap_err();

        assert!(matches!(err, FormError::DuplicateAuthor));
        assert_eq!(catalog.count_authors().await.unwrap(), 1);
    }
}
