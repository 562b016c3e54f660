use super::{page, Flash};
use libris_shared::models::author::NAME_MAX_LEN;
use maud::{html, Markup};

/// The add-author form
///
/// Always rendered empty: values from a rejected submission are not echoed back.
pub fn add_author_page(flash: &Flash) -> Markup {
    page(
        "Add author",
        html! {
            (flash.render())
            form method="post" action="/add_author" {
                label {
                    "Name"
                    input type="text" name="name" required maxlength=(NAME_MAX_LEN);
                }
                label {
                    "Birth date"
                    input type="date" name="birth_date";
                }
                label {
                    "Date of death"
                    input type="date" name="date_of_death";
                }
                button type="submit" { "Add author" }
            }
        },
    )
}
