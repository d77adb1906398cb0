use crate::domain::listing::Listing;
use crate::templates::components::link_button;
use crate::templates::desktop_layout;
use crate::templates::format::{format_access_detail, format_date, format_price};
use crate::templates::pages::properties::loading_page;
use crate::views::{DetailState, Route};
use maud::{html, Markup};

pub fn property_detail_page(state: &DetailState) -> Markup {
    match state {
        DetailState::Loading => loading_page("loading"),
        DetailState::NotFound => not_found_page(),
        DetailState::Populated(listing) => detail_page(listing),
    }
}

fn not_found_page() -> Markup {
    desktop_layout(
        "Property not found",
        true,
        html! {
            div class="container mx-auto px-4 py-8" data-view-state="not_found" {
                div { "Property not found" }
                (link_button(&Route::Properties.path(), "← 一覧に戻る"))
            }
        },
    )
}

fn detail_page(listing: &Listing) -> Markup {
    desktop_layout(
        &listing.name,
        true,
        html! {
            div class="container mx-auto px-4 py-8" data-view-state="populated" {
                div class="max-w-2xl mx-auto" {
                    (link_button(&Route::Properties.path(), "← 一覧に戻る"))

                    div class="bg-white rounded-lg shadow-lg p-6" {
                        h1 class="text-2xl font-bold mb-4" { (listing.name) }

                        div class="space-y-4" {
                            div class="text-3xl font-bold text-blue-600" { (format_price(listing.price)) }

                            div class="space-y-2" {
                                p class="text-gray-700" {
                                    span class="font-semibold" { "住所:" } " " (listing.address)
                                }
                                p class="text-gray-700" {
                                    span class="font-semibold" { "最寄り駅:" } " "
                                    (format_access_detail(&listing.station_name, listing.station_distance))
                                }
                                p class="text-gray-700" {
                                    span class="font-semibold" { "登録日:" } " " (format_date(&listing.created_at))
                                }
                                p class="text-gray-700" {
                                    span class="font-semibold" { "更新日:" } " " (format_date(&listing.updated_at))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
