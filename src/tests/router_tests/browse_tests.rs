// src/tests/router_tests/browse_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, content_type, get, test_catalog};

/// `data-id` values of the rendered rows, in page order.
fn row_ids(body: &str) -> Vec<i64> {
    body.match_indices("data-id=\"")
        .map(|(i, m)| {
            let rest = &body[i + m.len()..];
            let end = rest.find('"').unwrap();
            rest[..end].parse().unwrap()
        })
        .collect()
}

#[test]
fn home_lists_everything_in_source_order() {
    let catalog = test_catalog();
    let mut resp = handle(get("/"), &catalog).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(content_type(&resp), "text/html; charset=utf-8");

    let body = body_string(&mut resp);
    assert_eq!(row_ids(&body), vec![1, 2, 3, 4]);
    assert!(body.contains("VibeMarket — Browse Listings"));
    assert!(body.contains("Showing <strong>4</strong> of 4 listings"));
    assert!(!body.contains("No listings match your filters."));
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let catalog = test_catalog();

    let mut resp = handle(get("/?q=ORCHARD"), &catalog).unwrap();
    assert_eq!(row_ids(&body_string(&mut resp)), vec![1, 3]);

    // Matches the category text too.
    let mut resp = handle(get("/?q=dairy"), &catalog).unwrap();
    assert_eq!(row_ids(&body_string(&mut resp)), vec![2]);
}

#[test]
fn search_text_is_url_decoded() {
    let catalog = test_catalog();
    let mut resp = handle(get("/?q=ripe+%26+sweet"), &catalog).unwrap();
    assert_eq!(row_ids(&body_string(&mut resp)), vec![3]);
}

#[test]
fn category_filter_and_active_button() {
    let catalog = test_catalog();
    let mut resp = handle(get("/?category=Fruit"), &catalog).unwrap();
    let body = body_string(&mut resp);

    assert_eq!(row_ids(&body), vec![1, 3]);
    assert!(body.contains(r#"<a class="active" href="/?category=Fruit">Fruit</a>"#));
    assert!(body.contains(r#"<a href="/">All</a>"#));
}

#[test]
fn category_buttons_come_from_full_catalog() {
    let catalog = test_catalog();
    let mut resp = handle(get("/?q=milk"), &catalog).unwrap();
    let body = body_string(&mut resp);

    for c in ["All", "Dairy", "Fruit", "Garden"] {
        assert!(body.contains(&format!(">{c}</a>")), "missing category {c}");
    }
}

#[test]
fn price_sort_keeps_ties_in_source_order() {
    let catalog = test_catalog();

    let mut resp = handle(get("/?sort=asc"), &catalog).unwrap();
    assert_eq!(row_ids(&body_string(&mut resp)), vec![2, 1, 3, 4]);

    let mut resp = handle(get("/?sort=desc"), &catalog).unwrap();
    assert_eq!(row_ids(&body_string(&mut resp)), vec![4, 1, 3, 2]);
}

#[test]
fn filters_combine() {
    let catalog = test_catalog();
    let mut resp = handle(get("/?q=orchard&category=Fruit&sort=desc"), &catalog).unwrap();
    let body = body_string(&mut resp);

    assert_eq!(row_ids(&body), vec![1, 3]);
    // Search form carries the other two inputs.
    assert!(body.contains(r#"<input type="hidden" name="category" value="Fruit">"#));
    assert!(body.contains(r#"<input type="hidden" name="sort" value="desc">"#));
}

#[test]
fn no_results_message() {
    let catalog = test_catalog();
    let mut resp = handle(get("/?q=caviar"), &catalog).unwrap();
    let body = body_string(&mut resp);

    assert_eq!(resp.status(), 200);
    assert!(row_ids(&body).is_empty());
    assert!(body.contains("No listings match your filters."));
}

#[test]
fn unknown_category_is_an_empty_result_not_an_error() {
    let catalog = test_catalog();
    let mut resp = handle(get("/?category=Bakery"), &catalog).unwrap();
    assert!(body_string(&mut resp).contains("No listings match your filters."));
}

#[test]
fn bad_sort_is_rejected() {
    let catalog = test_catalog();
    let err = handle(get("/?sort=cheapest"), &catalog).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(err.status(), 400);
}

#[test]
fn broken_images_fall_back_to_placeholder() {
    let catalog = test_catalog();
    let mut resp = handle(get("/"), &catalog).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("this.src='/placeholder.svg'"));
    assert!(body.contains(r#"src="/images/apple.jpg""#));
}

#[test]
fn listing_text_is_escaped() {
    let catalog = test_catalog();
    let mut resp = handle(get("/?q=ripe"), &catalog).unwrap();
    assert!(body_string(&mut resp).contains("Ripe &amp; sweet"));
}
