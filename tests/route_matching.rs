use serde_json::json;
use spindle::proxy::RoutePattern;
use spindle::{ServiceProxy, SimulatedProxy};

#[test]
fn placeholder_captures_named_segment() {
    let pattern = RoutePattern::parse("/products/search/{searchText}");
    let params = pattern.matches("/products/search/glove").unwrap();
    assert_eq!(params["searchText"], "glove");
}

#[test]
fn address_missing_a_segment_does_not_match() {
    let pattern = RoutePattern::parse("/products/search/{searchText}");
    assert!(pattern.matches("/products/search").is_none());
}

#[tokio::test]
async fn unmatched_read_fails_with_no_matching_route() {
    let proxy = SimulatedProxy::new().on_read("/products/search/{searchText}", |params| {
        Ok(json!([params["searchText"]]))
    });

    let err = proxy.read("/products/search").await.unwrap_err();
    assert!(err.is_setup_defect());
    assert!(err.to_string().contains("no matching route"));
}

#[tokio::test]
async fn routes_match_in_registration_order() {
    let proxy = SimulatedProxy::new()
        .on_read("/products/{id}", |_| Ok(json!("placeholder")))
        .on_read("/products/featured", |_| Ok(json!("literal")));

    // Both patterns structurally match; the earlier registration wins.
    let value = proxy.read("/products/featured").await.unwrap();
    assert_eq!(value, json!("placeholder"));
}

#[tokio::test]
async fn rating_write_round_trips_through_the_catalog() {
    let proxy = spindle::search::demo_catalog();

    let ack = proxy
        .write("/products/2/rating", json!({ "rating": 4 }))
        .await
        .unwrap();
    assert_eq!(ack, json!({ "productId": 2, "rating": 4 }));
}

#[tokio::test]
async fn out_of_range_rating_is_rejected() {
    let proxy = spindle::search::demo_catalog();

    let err = proxy
        .write("/products/2/rating", json!({ "rating": 9 }))
        .await
        .unwrap_err();
    assert!(!err.is_setup_defect());
    assert_eq!(err.to_string(), "rating must be an integer from 1 to 5");
}
