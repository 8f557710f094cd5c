//! In-memory backend answering reads and writes from registered routes.

use std::ops::RangeInclusive;

use async_trait::async_trait;
use rand::Rng;
use serde_json::Value;
use tokio::time::{sleep, Duration};

use super::error::{ProxyError, RouteKind};
use super::route::{RouteParams, RoutePattern};
use super::ServiceProxy;

type ReadHandler = Box<dyn Fn(&RouteParams) -> Result<Value, String> + Send + Sync>;
type WriteHandler = Box<dyn Fn(&RouteParams, &Value) -> Result<Value, String> + Send + Sync>;

struct ReadRoute {
    pattern: RoutePattern,
    handler: ReadHandler,
}

struct WriteRoute {
    pattern: RoutePattern,
    handler: WriteHandler,
}

/// Simulated service backend.
///
/// Routes are consulted in registration order; the first pattern that
/// structurally matches the address wins and its handler resolves the
/// call. Handlers return either a result value or a rejection message. An
/// address no route matches is a setup defect and fails the call with
/// [`ProxyError::NoMatchingRoute`].
///
/// The optional latency window approximates real-backend timing variance
/// for exploratory use. It is off by default and stays off in
/// deterministic tests.
pub struct SimulatedProxy {
    reads: Vec<ReadRoute>,
    writes: Vec<WriteRoute>,
    latency_ms: Option<RangeInclusive<u64>>,
}

impl SimulatedProxy {
    pub fn new() -> Self {
        Self {
            reads: Vec::new(),
            writes: Vec::new(),
            latency_ms: None,
        }
    }

    /// Register a read route. Registration order is match order.
    pub fn on_read<F>(mut self, pattern: &str, handler: F) -> Self
    where
        F: Fn(&RouteParams) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.reads.push(ReadRoute {
            pattern: RoutePattern::parse(pattern),
            handler: Box::new(handler),
        });
        self
    }

    /// Register a write route. The handler also receives the JSON body.
    pub fn on_write<F>(mut self, pattern: &str, handler: F) -> Self
    where
        F: Fn(&RouteParams, &Value) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.writes.push(WriteRoute {
            pattern: RoutePattern::parse(pattern),
            handler: Box::new(handler),
        });
        self
    }

    /// Delay every resolution by a random duration from `window`
    /// (milliseconds).
    pub fn with_latency(mut self, window: RangeInclusive<u64>) -> Self {
        self.latency_ms = Some(window);
        self
    }

    async fn simulate_latency(&self) {
        if let Some(window) = &self.latency_ms {
            let ms = rand::thread_rng().gen_range(window.clone());
            sleep(Duration::from_millis(ms)).await;
        }
    }
}

impl Default for SimulatedProxy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceProxy for SimulatedProxy {
    async fn read(&self, address: &str) -> Result<Value, ProxyError> {
        self.simulate_latency().await;
        for route in &self.reads {
            if let Some(params) = route.pattern.matches(address) {
                tracing::debug!(address, "simulated read matched");
                return (route.handler)(&params)
                    .map_err(|message| ProxyError::Rejected { message });
            }
        }
        Err(ProxyError::NoMatchingRoute {
            kind: RouteKind::Read,
            address: address.to_string(),
        })
    }

    async fn write(&self, address: &str, body: Value) -> Result<Value, ProxyError> {
        self.simulate_latency().await;
        for route in &self.writes {
            if let Some(params) = route.pattern.matches(address) {
                tracing::debug!(address, "simulated write matched");
                return (route.handler)(&params, &body)
                    .map_err(|message| ProxyError::Rejected { message });
            }
        }
        Err(ProxyError::NoMatchingRoute {
            kind: RouteKind::Write,
            address: address.to_string(),
        })
    }
}
