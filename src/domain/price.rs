// src/domain/price.rs

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII digits only; `\d` would also match other Unicode digit classes.
static FIRST_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("price pattern is a valid regex")
});

/// Extracts the first number in a price display string, used as the sort key.
///
/// "18 USD/500g" -> 18. When a string carries several numbers ("20 USD/5kg")
/// only the first one counts, so mixed units are compared as-is.
/// Strings with no number at all ("Free") give `f64::INFINITY`, which sorts
/// them last ascending and first descending.
pub fn parse_price_number(price: &str) -> f64 {
    FIRST_NUMBER
        .find(price)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::INFINITY)
}
