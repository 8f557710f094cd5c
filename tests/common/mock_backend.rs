//! Mock catalog server for exercising the http proxy end to end.

#![allow(dead_code)]

use axum::extract::{Json, Path};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// A real HTTP server answering the same addresses the simulated catalog
/// does, so the proxy swap can be proven end to end.
pub struct MockCatalog {
    pub addr: SocketAddr,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockCatalog {
    /// Start the server on an ephemeral port.
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/products/search/{search_text}", get(search))
            .route("/products/{product_id}/rating", post(rate));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock catalog");
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for the server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockCatalog {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn search(Path(search_text): Path<String>) -> (StatusCode, Json<Value>) {
    // "boom" simulates an upstream outage.
    if search_text == "boom" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "catalog exploded" })),
        );
    }

    let catalog = [
        json!({ "id": 1, "name": "Baseball glove", "price_cents": 3999 }),
        json!({ "id": 2, "name": "Baseball bat", "price_cents": 5499 }),
        json!({ "id": 3, "name": "Hockey stick", "price_cents": 8999 }),
    ];
    let needle = search_text.to_lowercase();
    let hits: Vec<Value> = catalog
        .into_iter()
        .filter(|product| {
            product["name"]
                .as_str()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .collect();
    (StatusCode::OK, Json(Value::Array(hits)))
}

async fn rate(
    Path(product_id): Path<u64>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    match body.get("rating").and_then(Value::as_u64) {
        Some(rating) if (1..=5).contains(&rating) => (
            StatusCode::OK,
            Json(json!({ "productId": product_id, "rating": rating })),
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "rating must be an integer from 1 to 5" })),
        ),
    }
}
