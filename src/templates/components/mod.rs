pub mod controls;
pub mod error;
pub mod listing_row;

pub use controls::{category_filter, search_form, sort_toggle};
pub use error::html_error_response;
pub use listing_row::listing_row;
