pub mod asset;
pub mod html;
pub mod json;

pub use asset::asset_response;
pub use html::html_response;
pub use json::{json_error_response, json_response};
