use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 52rem; padding: 1rem; color: #222; }
nav a { margin-right: 1rem; }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: .4rem .6rem; border-bottom: 1px solid #ddd; }
form label { display: block; margin: .6rem 0; }
form input, form select { display: block; margin-top: .2rem; min-width: 20rem; }
.flash { padding: .5rem .8rem; border-radius: 4px; }
.flash.success { background: #e6f4ea; color: #1e4620; }
.flash.error { background: #fdecea; color: #611a15; }
.sort a.active { font-weight: bold; text-decoration: none; }
"#;

/// Wraps page content in the shared document shell
pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · Libris" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                nav {
                    a href="/" { "Books" }
                    a href="/add_author" { "Add author" }
                    a href="/add_book" { "Add book" }
                }
                main {
                    h1 { (title) }
                    (content)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_escapes_title() {
        let html = page("<script>", html! { p { "body" } }).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("href=\"/add_book\""));
    }
}
