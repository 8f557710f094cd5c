//! Error types for service-proxy resolution.

use std::fmt;

use thiserror::Error;

/// Which route table a simulated lookup consulted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RouteKind {
    Read,
    Write,
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteKind::Read => write!(f, "read"),
            RouteKind::Write => write!(f, "write"),
        }
    }
}

/// Errors a [`ServiceProxy`](super::ServiceProxy) call can produce.
///
/// Only [`ProxyError::NoMatchingRoute`] marks a setup defect; operation
/// groups let it surface to their caller. Every other variant is a
/// resolution failure, absorbed there into a failure event.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// No simulated route matches the address. The route table is wired at
    /// setup, so this is a configuration mistake, not a runtime condition.
    #[error("no matching route: {kind} '{address}'")]
    NoMatchingRoute { kind: RouteKind, address: String },

    /// A simulated handler rejected the call.
    #[error("{message}")]
    Rejected { message: String },

    /// The upstream answered with a non-success status.
    #[error("upstream error: {status} {message}")]
    Upstream { status: u16, message: String },

    /// The network call itself failed.
    #[error("connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the JSON the caller expected.
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

impl ProxyError {
    /// True for errors that indicate mis-wiring rather than a runtime
    /// failure. These surface to the caller instead of becoming state.
    pub fn is_setup_defect(&self) -> bool {
        matches!(self, ProxyError::NoMatchingRoute { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_matching_route_is_setup_defect() {
        let err = ProxyError::NoMatchingRoute {
            kind: RouteKind::Read,
            address: "/products".to_string(),
        };
        assert!(err.is_setup_defect());
        assert_eq!(err.to_string(), "no matching route: read '/products'");
    }

    #[test]
    fn rejection_displays_bare_message() {
        let err = ProxyError::Rejected {
            message: "catalog offline".to_string(),
        };
        assert!(!err.is_setup_defect());
        assert_eq!(err.to_string(), "catalog offline");
    }

    #[test]
    fn upstream_error_carries_status() {
        let err = ProxyError::Upstream {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(!err.is_setup_defect());
        assert_eq!(err.to_string(), "upstream error: 503 unavailable");
    }
}
