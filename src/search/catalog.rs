//! Demo dataset and routes for scenario tests and exploratory wiring.

use serde_json::{json, Value};

use crate::proxy::SimulatedProxy;

use super::state::Product;

/// A simulated backend seeded with a small product catalog.
///
/// Routes:
/// - read `/products/search/{searchText}` — case-insensitive substring
///   match over product names; no hits is an empty list, not a failure
/// - write `/products/{productId}/rating` — acknowledges a posted rating
///   of 1 through 5
pub fn demo_catalog() -> SimulatedProxy {
    let products = vec![
        Product {
            id: 1,
            name: "Baseball glove".to_string(),
            price_cents: 3999,
        },
        Product {
            id: 2,
            name: "Baseball bat".to_string(),
            price_cents: 5499,
        },
        Product {
            id: 3,
            name: "Hockey stick".to_string(),
            price_cents: 8999,
        },
    ];

    SimulatedProxy::new()
        .on_read("/products/search/{searchText}", move |params| {
            let needle = params
                .get("searchText")
                .map(|text| text.to_lowercase())
                .unwrap_or_default();
            let hits: Vec<&Product> = products
                .iter()
                .filter(|product| product.name.to_lowercase().contains(&needle))
                .collect();
            serde_json::to_value(&hits).map_err(|err| err.to_string())
        })
        .on_write("/products/{productId}/rating", |params, body| {
            let product_id = params
                .get("productId")
                .and_then(|id| id.parse::<u64>().ok());
            let Some(product_id) = product_id else {
                return Err("product id must be numeric".to_string());
            };
            match body.get("rating").and_then(Value::as_u64) {
                Some(rating) if (1..=5).contains(&rating) => {
                    Ok(json!({ "productId": product_id, "rating": rating }))
                }
                _ => Err("rating must be an integer from 1 to 5".to_string()),
            }
        })
}
