// responses/asset.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

pub const MAIN_CSS: &str = include_str!("../../static/main.css");
pub const PLACEHOLDER_SVG: &str = include_str!("../../static/placeholder.svg");

/// Serve a bundled static file with a long cache lifetime.
pub fn asset_response(content: &'static str, content_type: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header("Cache-Control", "public, max-age=86400")
        .body(Body::from(content))
        .map_err(|_| ServerError::InternalError)
}
