use crate::catalog::Catalog;
use astra::{Body, Request, Response};
use std::io::Read;

/// Small catalog with a tie on price and one listing without a number.
pub fn test_catalog() -> Catalog {
    Catalog::from_json(
        r#"[
            {"id":1,"title":"Apple","description":"Crisp autumn apples","price":"5 USD/kg","provider":"Orchard Hill","category":"Fruit","image":"/images/apple.jpg"},
            {"id":2,"title":"Milk","description":"Whole milk","price":"3 USD/L","provider":"Meadow Dairy","category":"Dairy","image":"/images/milk.jpg"},
            {"id":3,"title":"Pear","description":"Ripe & sweet","price":"5 USD/box","provider":"Orchard Hill","category":"Fruit","image":""},
            {"id":4,"title":"Seed swap","description":"Bring one, take one","price":"Free","provider":"Community Garden","category":"Garden","image":""}
        ]"#,
    )
    .unwrap_or_else(|e| panic!("test catalog failed to parse: {e}"))
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body = String::new();
    resp.body_mut().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn content_type(resp: &Response) -> &str {
    resp.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
