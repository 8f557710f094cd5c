use crate::dispatch::Operation;

use super::state::Product;

/// Identities of the search area's declarative operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SearchOp {
    QueryChanged,
    SearchStarted,
    SearchSucceeded,
    SearchFailed,
}

impl Operation for SearchOp {}

/// Payload carried by a search event.
#[derive(Clone, Debug)]
pub enum SearchPayload {
    Query(String),
    Results(Vec<Product>),
    Failure(String),
    /// Signal-only events carry no data.
    Empty,
}
