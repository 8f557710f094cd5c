mod common;

use std::sync::Arc;

use common::mock_backend::MockCatalog;
use serde_json::json;
use spindle::search::search_view;
use spindle::{App, HttpProxy, ProxyError, ServiceProxy};

#[tokio::test]
async fn read_decodes_the_json_body() {
    common::init_tracing();
    let server = MockCatalog::start().await;
    let proxy = HttpProxy::new(server.base_url());

    let value = proxy.read("/products/search/glove").await.unwrap();
    let hits = value.as_array().expect("list body");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "Baseball glove");
}

#[tokio::test]
async fn write_posts_the_json_body() {
    let server = MockCatalog::start().await;
    let proxy = HttpProxy::new(server.base_url());

    let ack = proxy
        .write("/products/1/rating", json!({ "rating": 5 }))
        .await
        .unwrap();
    assert_eq!(ack, json!({ "productId": 1, "rating": 5 }));
}

#[tokio::test]
async fn upstream_failure_is_reported_verbatim() {
    let server = MockCatalog::start().await;
    let proxy = HttpProxy::new(server.base_url());

    let err = proxy.read("/products/search/boom").await.unwrap_err();
    match err {
        ProxyError::Upstream { status, .. } => assert_eq!(status, 500),
        other => panic!("expected upstream error, got {other}"),
    }
}

#[tokio::test]
async fn same_orchestration_runs_against_the_http_backend() {
    let server = MockCatalog::start().await;
    let app = App::new(Arc::new(HttpProxy::new(server.base_url())));

    app.search.query_changed("glove");
    app.search.search().await.expect("mock catalog is up");

    let view = search_view(&app.store().state());
    assert!(!view.loading);
    assert_eq!(view.error_message, "");
    assert_eq!(view.results.len(), 1);
    assert_eq!(view.results[0].name, "Baseball glove");
}

#[tokio::test]
async fn connection_failure_is_absorbed_into_state() {
    // Nothing listens here; the connect fails.
    let app = App::new(Arc::new(HttpProxy::new("http://127.0.0.1:1")));

    app.search.query_changed("glove");
    app.search
        .search()
        .await
        .expect("connection failures are absorbed");

    let view = search_view(&app.store().state());
    assert!(!view.loading);
    assert!(!view.error_message.is_empty());
}
