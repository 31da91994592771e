use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::domain::browse::{Browse, Control};
use crate::domain::listing::Listing;
use crate::domain::pipeline::SortMode;
use crate::errors::{ResultResp, ServerError};
use crate::responses::asset::{MAIN_CSS, PLACEHOLDER_SVG};
use crate::responses::{asset_response, html_response, json_error_response, json_response};
use crate::templates;
use astra::Request;
use serde::Serialize;
use url::form_urlencoded;

pub fn handle(req: Request, catalog: &Catalog) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    tracing::info!(method, path, "request");

    match (method, path) {
        ("GET", "/") => {
            let browse = browse_from_query(&req, catalog)?;
            html_response(templates::pages::browse_page(&browse))
        }

        // JSON view of the same pipeline; errors stay JSON here.
        ("GET", "/api/listings") => match api_listings(&req, catalog) {
            Ok(resp) => Ok(resp),
            Err(err) => {
                tracing::warn!(error = %err, "api request rejected");
                Ok(json_error_response(&err))
            }
        },

        ("GET", "/static/main.css") => asset_response(MAIN_CSS, "text/css; charset=utf-8"),
        ("GET", "/placeholder.svg") => asset_response(PLACEHOLDER_SVG, "image/svg+xml"),

        _ => Err(ServerError::NotFound),
    }
}

#[derive(Serialize)]
struct ListingsPayload<'a> {
    query: &'a str,
    category: &'a str,
    sort: SortMode,
    categories: &'a [String],
    total: usize,
    count: usize,
    listings: &'a [&'a Listing],
}

fn api_listings(req: &Request, catalog: &Catalog) -> ResultResp {
    let browse = browse_from_query(req, catalog)?;
    let filters = browse.filters();

    json_response(&ListingsPayload {
        query: &filters.query,
        category: &filters.category,
        sort: filters.sort,
        categories: browse.categories(),
        total: browse.total(),
        count: browse.visible().len(),
        listings: browse.visible(),
    })
}

/// Starts from the default browse state and replays the request's `q`,
/// `category` and `sort` parameters as control changes. Missing or empty
/// values keep the defaults; an unknown sort mode is a bad request.
fn browse_from_query<'a>(req: &Request, catalog: &'a Catalog) -> Result<Browse<'a>, ServerError> {
    let params = parse_query(req);
    let sort = match params.get("sort") {
        Some(sort) => Some(sort.parse::<SortMode>().map_err(ServerError::BadRequest)?),
        None => None,
    };

    let mut browse = Browse::new(catalog);

    if let Some(q) = params.get("q") {
        browse.apply(Control::Search(q.clone()));
    }
    if let Some(category) = params.get("category").filter(|c| !c.is_empty()) {
        browse.apply(Control::SelectCategory(category.clone()));
    }
    if let Some(sort) = sort {
        browse.apply(Control::Sort(sort));
    }

    Ok(browse)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
