// src/domain/pipeline.rs

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::listing::Listing;
use crate::domain::price::parse_price_number;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Price ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    None,
    Asc,
    Desc,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::None, SortMode::Asc, SortMode::Desc];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::Asc => "asc",
            SortMode::Desc => "desc",
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "" => Ok(SortMode::None),
            "asc" => Ok(SortMode::Asc),
            "desc" => Ok(SortMode::Desc),
            other => Err(format!("unknown sort mode '{other}' (expected none, asc or desc)")),
        }
    }
}

/// Snapshot of the three user-controlled inputs to the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Filters {
    pub query: String,
    pub category: String,
    pub sort: SortMode,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort: SortMode::None,
        }
    }
}

/// True when the listing passes both the text search and the category filter.
///
/// `query_lower` must already be lowercased; the pipeline lowers it once per
/// recompute instead of once per listing.
pub fn matches(listing: &Listing, query_lower: &str, category: &str) -> bool {
    let matches_text = [
        &listing.title,
        &listing.description,
        &listing.provider,
        &listing.category,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query_lower));

    let matches_category = category == ALL_CATEGORIES || listing.category == category;

    matches_text && matches_category
}

/// Stable price sort over an already-filtered selection.
///
/// Descending uses the flipped comparator rather than reversing the
/// ascending result, so equal prices keep source order in both directions.
pub fn sort_by_price(selection: &mut [&Listing], mode: SortMode) {
    match mode {
        SortMode::None => {}
        SortMode::Asc => selection.sort_by(|a, b| {
            parse_price_number(&a.price).total_cmp(&parse_price_number(&b.price))
        }),
        SortMode::Desc => selection.sort_by(|a, b| {
            parse_price_number(&b.price).total_cmp(&parse_price_number(&a.price))
        }),
    }
}

/// Computes the visible listings for one filter snapshot.
///
/// The result is a fresh vector of references in display order; `listings`
/// itself is never reordered.
pub fn visible_listings<'a>(listings: &'a [Listing], filters: &Filters) -> Vec<&'a Listing> {
    let q = filters.query.to_lowercase();

    let mut selection: Vec<&Listing> = listings
        .iter()
        .filter(|l| matches(l, &q, &filters.category))
        .collect();

    sort_by_price(&mut selection, filters.sort);

    tracing::debug!(
        query = %filters.query,
        category = %filters.category,
        sort = filters.sort.as_str(),
        visible = selection.len(),
        total = listings.len(),
        "recomputed visible listings"
    );

    selection
}
