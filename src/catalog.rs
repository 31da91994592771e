use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use crate::domain::listing::Listing;
use crate::domain::pipeline::ALL_CATEGORIES;
use crate::errors::CatalogError;

/// Listings compiled into the binary, used when no data file is configured.
const BUNDLED_LISTINGS: &str = include_str!("../data/listings.json");

/// The listing collection plus the category list derived from it.
///
/// Built once at startup and only ever borrowed afterwards; nothing in the
/// crate mutates it.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
    categories: Vec<String>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        warn_on_duplicate_ids(&listings);
        let categories = enumerate_categories(&listings);
        Self {
            listings,
            categories,
        }
    }

    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_LISTINGS)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let listings: Vec<Listing> = serde_json::from_str(raw)?;
        Ok(Self::new(listings))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// "All" followed by every distinct category, sorted.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

/// Distinct categories in ascending order behind the "All" sentinel. A data
/// category spelled "All" collapses into the sentinel.
fn enumerate_categories(listings: &[Listing]) -> Vec<String> {
    let distinct: BTreeSet<&str> = listings
        .iter()
        .map(|l| l.category.as_str())
        .filter(|c| *c != ALL_CATEGORIES)
        .collect();

    std::iter::once(ALL_CATEGORIES)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}

fn warn_on_duplicate_ids(listings: &[Listing]) {
    let mut seen = HashSet::new();
    for listing in listings {
        if !seen.insert(listing.id) {
            tracing::warn!(id = listing.id, title = %listing.title, "duplicate listing id");
        }
    }
}
