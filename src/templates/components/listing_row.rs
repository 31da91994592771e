use crate::domain::listing::Listing;
use maud::{html, Markup};

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// One listing as a horizontal card: thumbnail, details, price.
pub fn listing_row(item: &Listing) -> Markup {
    // Swap in the placeholder once if the image fails to load.
    let fallback = format!("this.onerror=null;this.src='{PLACEHOLDER_IMAGE}';");

    html! {
        div class="listing-row" data-id=(item.id) {
            img src=(item.image) alt=(item.title) onerror=(fallback);

            div class="listing-info" {
                div style="display: flex; align-items: flex-start; gap: 0.5rem;" {
                    h2 { (item.title) }
                    span class="badge" style="margin-left: auto;" { (item.category) }
                }
                p { (item.description) }
                p class="provider" { "by " (item.provider) }
            }

            div class="listing-price" { (item.price) }
        }
    }
}
