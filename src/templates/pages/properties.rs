// templates/pages/properties.rs

use crate::templates::{components::post_button, desktop_layout, property_list};
use crate::views::ListState;
use maud::{html, Markup};

/// Placeholder shown while a view has nothing to display yet.
/// `state` ends up in `data-view-state` so a failed fetch stays observable.
pub fn loading_page(state: &str) -> Markup {
    desktop_layout(
        "Loading...",
        true,
        html! {
            div class="container mx-auto px-4 py-8" data-view-state=(state) { "Loading..." }
        },
    )
}

pub fn properties_page(state: &ListState) -> Markup {
    let listings = match state {
        ListState::Loading => return loading_page("loading"),
        ListState::Error(_) => return loading_page("error"),
        ListState::Empty => &[][..],
        ListState::Populated(listings) => listings.as_slice(),
    };
    let view_state = if listings.is_empty() { "empty" } else { "populated" };

    desktop_layout(
        "物件一覧",
        true,
        html! {
            div class="container mx-auto px-4 py-8" data-view-state=(view_state) {
                div class="flex justify-between items-center mb-6" {
                    h1 class="text-2xl font-bold" { "物件一覧" }
                    (post_button("/logout", "ログアウト"))
                }
                @if listings.is_empty() {
                    p class="text-gray-600" { "物件がありません" }
                } @else {
                    (property_list(listings))
                }
            }
        },
    )
}
