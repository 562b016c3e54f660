use super::{page, Flash};
use libris_shared::models::{
    author::Author,
    book::{BookListing, SortOrder, ISBN_MAX_LEN, TITLE_MAX_LEN},
};
use maud::{html, Markup};

/// The catalog: every book, with links to switch the sort order
pub fn home_page(books: &[BookListing], sort: SortOrder) -> Markup {
    page(
        "Books",
        html! {
            p.sort {
                "Sort by: "
                a.active[sort == SortOrder::Title] href="/?sort=title" { "Title" }
                " | "
                a.active[sort == SortOrder::Author] href="/?sort=author" { "Author" }
            }
            @if books.is_empty() {
                p { "No books yet. " a href="/add_book" { "Add the first one." } }
            } @else {
                table {
                    thead {
                        tr { th { "Title" } th { "Author" } th { "Year" } th { "ISBN" } }
                    }
                    tbody {
                        @for book in books {
                            tr {
                                td { (book.title) }
                                td { (book.author_name) }
                                td {
                                    @if let Some(year) = book.publication_year { (year) }
                                }
                                td { (book.isbn) }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// The add-book form; the author list feeds the selection control
pub fn add_book_page(authors: &[Author], flash: &Flash) -> Markup {
    page(
        "Add book",
        html! {
            (flash.render())
            @if authors.is_empty() {
                p { "There are no authors yet. " a href="/add_author" { "Add an author" } " first." }
            }
            form method="post" action="/add_book" {
                label {
                    "ISBN"
                    input type="text" name="isbn" required maxlength=(ISBN_MAX_LEN);
                }
                label {
                    "Title"
                    input type="text" name="title" required maxlength=(TITLE_MAX_LEN);
                }
                label {
                    "Publication year"
                    input type="number" name="publication_year" step="1";
                }
                label {
                    "Author"
                    select name="author_id" required {
                        option value="" { "Select an author" }
                        @for author in authors {
                            option value=(author.id) { (author.name) }
                        }
                    }
                }
                button type="submit" { "Add book" }
            }
        },
    )
}
