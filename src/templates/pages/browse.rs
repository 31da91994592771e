// templates/pages/browse.rs

use crate::domain::browse::Browse;
use crate::templates::{
    components::{category_filter, listing_row, search_form, sort_toggle},
    desktop_layout,
};
use maud::{html, Markup};

pub fn browse_page(browse: &Browse) -> Markup {
    let filters = browse.filters();

    desktop_layout(
        "VibeMarket — Browse Listings",
        html! {
            main class="container" {
                h1 { "VibeMarket — Browse Listings" }

                div class="controls" {
                    (search_form(filters))
                    (sort_toggle(filters))
                }

                (category_filter(browse.categories(), filters))

                p class="summary" {
                    "Showing " strong { (browse.visible().len()) } " of " (browse.total()) " listings"
                }

                section class="listings" {
                    @for item in browse.visible() {
                        (listing_row(item))
                    }

                    @if browse.visible().is_empty() {
                        p class="empty" { "No listings match your filters." }
                    }
                }
            }
        },
    )
}
