//! Capability boundary for external reads and writes.
//!
//! Operation groups talk to the outside world only through
//! [`ServiceProxy`]. Exactly one implementation is selected at composition
//! time and injected everywhere; swapping the simulated backend for the
//! real one (or back) changes no orchestration or binding code.

mod error;
mod http;
mod route;
mod simulated;

pub use error::{ProxyError, RouteKind};
pub use http::HttpProxy;
pub use route::{RouteParams, RoutePattern};
pub use simulated::SimulatedProxy;

use async_trait::async_trait;
use serde_json::Value;

/// Read/write access to an external service, addressed by hierarchical
/// path such as `/products/search/glove`.
#[async_trait]
pub trait ServiceProxy: Send + Sync {
    /// Resolve a read against `address`.
    async fn read(&self, address: &str) -> Result<Value, ProxyError>;

    /// Resolve a write of `body` against `address`.
    async fn write(&self, address: &str, body: Value) -> Result<Value, ProxyError>;
}
