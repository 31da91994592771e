// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors raised while routing a request. Each one maps to an error page
/// (or a JSON error body on the API routes).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

/// Errors from loading the listing collection at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read listings file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("listings data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
