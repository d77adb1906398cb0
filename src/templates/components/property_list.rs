use crate::domain::listing::Listing;
use crate::templates::components::property_card;
use maud::{html, Markup};

/// Grid of cards, one per listing, in backend order.
pub fn property_list(listings: &[Listing]) -> Markup {
    html! {
        div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4" {
            @for listing in listings {
                (property_card(listing))
            }
        }
    }
}
