use crate::templates::desktop_layout;
use crate::views::Route;
use maud::{html, Markup};

/// Full error page for a failed request.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        false,
        html! {
            main class="container narrow" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href=(Route::Properties.path()) { "← 物件一覧へ" } }
            }
        },
    )
}
