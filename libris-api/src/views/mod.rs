//! HTML views
//!
//! Pages are rendered with `maud`, so templates are checked at compile time
//! and every interpolated value is HTML-escaped.
//!
//! - `layout`: shared page shell and navigation
//! - `books`: the catalog listing and the add-book form
//! - `authors`: the add-author form

pub mod authors;
pub mod books;
mod layout;

use axum::http::StatusCode;
use maud::{html, Markup};

pub use layout::page;

/// Outcome message shown above a form after a submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: Some(message.into()),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: None,
            error: Some(message.into()),
        }
    }

    fn render(&self) -> Markup {
        html! {
            @if let Some(message) = &self.success {
                p.flash.success role="status" { (message) }
            }
            @if let Some(message) = &self.error {
                p.flash.error role="alert" { (message) }
            }
        }
    }
}

/// Page shown for 404s and server failures
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let title = status.canonical_reason().unwrap_or("Error");
    page(
        title,
        html! {
            p.flash.error { (message) }
            p { a href="/" { "Back to the catalog" } }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_renders_only_set_slots() {
        let html = Flash::success("Saved").render().into_string();
        assert!(html.contains("Saved"));
        assert!(html.contains("success"));
        assert!(!html.contains("role=\"alert\""));

        let html = Flash::default().render().into_string();
        assert!(html.is_empty());
    }

    #[test]
    fn test_error_page() {
        let html = error_page(StatusCode::NOT_FOUND, "No such page").into_string();
        assert!(html.contains("Not Found"));
        assert!(html.contains("No such page"));
    }
}
