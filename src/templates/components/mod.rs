use maud::{html, Markup};

pub mod error;
pub mod property_card;
pub mod property_list;

pub use error::error_page;
pub use property_card::property_card;
pub use property_list::property_list;

/// Secondary-style button that POSTs to `action`.
pub fn post_button(action: &str, label: &str) -> Markup {
    html! {
        form method="post" action=(action) class="inline" {
            button type="submit" class="btn btn-secondary" { (label) }
        }
    }
}

pub fn link_button(href: &str, label: &str) -> Markup {
    html! {
        a href=(href) class="btn btn-secondary mb-4" { (label) }
    }
}
