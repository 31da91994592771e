use serde::{Deserialize, Serialize};

/// One marketplace listing as it appears in the listings data file.
///
/// `price` is a display string ("12 USD/jar", "20 USD/5kg"), not a number.
/// Ordering by price goes through [`crate::domain::price::parse_price_number`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: String,
    pub provider: String,
    pub category: String,
    pub image: String,
}
