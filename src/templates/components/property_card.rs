use crate::domain::listing::Listing;
use crate::templates::format::{format_access, format_price};
use crate::views::Route;
use maud::{html, Markup};

pub fn property_card(listing: &Listing) -> Markup {
    html! {
        a class="property-card-link"
            href=(Route::Property(listing.id.clone()).path())
            data-key=(listing.id.as_str())
        {
            div class="border rounded-lg p-4 hover:shadow-lg transition-shadow" {
                h3 class="text-lg font-bold text-gray-900" { (listing.name) }
                p class="text-xl font-bold text-blue-600 my-2" { (format_price(listing.price)) }
                div class="space-y-1 text-sm text-gray-600" {
                    p { (listing.address) }
                    p { (format_access(&listing.station_name, listing.station_distance)) }
                }
            }
        }
    }
}
