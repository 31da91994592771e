// src/domain/browse.rs

use crate::catalog::Catalog;
use crate::domain::listing::Listing;
use crate::domain::pipeline::{visible_listings, Filters, SortMode};

/// A change coming from one of the page controls. These are the only
/// mutators of browse state.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Search(String),
    SelectCategory(String),
    Sort(SortMode),
}

/// Browse state over a catalog: the current filter inputs and the visible
/// listings derived from them.
///
/// `visible` is recomputed synchronously whenever an input changes, so it
/// always reflects the current `filters`.
pub struct Browse<'a> {
    catalog: &'a Catalog,
    filters: Filters,
    visible: Vec<&'a Listing>,
}

impl<'a> Browse<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_filters(catalog, Filters::default())
    }

    pub fn with_filters(catalog: &'a Catalog, filters: Filters) -> Self {
        let visible = visible_listings(catalog.listings(), &filters);
        Self {
            catalog,
            filters,
            visible,
        }
    }

    /// Applies a control. Returns whether the visible listings were
    /// recomputed; setting an input to its current value is a no-op.
    pub fn apply(&mut self, control: Control) -> bool {
        let changed = match control {
            Control::Search(query) => replace_if_changed(&mut self.filters.query, query),
            Control::SelectCategory(category) => {
                replace_if_changed(&mut self.filters.category, category)
            }
            Control::Sort(sort) => replace_if_changed(&mut self.filters.sort, sort),
        };

        if changed {
            self.visible = visible_listings(self.catalog.listings(), &self.filters);
        }
        changed
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn visible(&self) -> &[&'a Listing] {
        &self.visible
    }

    pub fn categories(&self) -> &'a [String] {
        self.catalog.categories()
    }

    pub fn total(&self) -> usize {
        self.catalog.listings().len()
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
