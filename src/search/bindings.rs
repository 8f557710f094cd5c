use crate::dispatch::Bindings;

use super::op::{SearchOp, SearchPayload};
use super::state::SearchState;

/// Binding table for the search subtree.
///
/// Payload arms that cannot occur for an operation fall through to the
/// unchanged state, the same stance the table takes on unbound events.
pub fn bindings() -> Bindings<SearchState, SearchOp, SearchPayload> {
    Bindings::new()
        .bind(SearchOp::QueryChanged, |state, payload| match payload {
            SearchPayload::Query(query) => SearchState { query, ..state },
            _ => state,
        })
        .bind(SearchOp::SearchStarted, |state, _| SearchState {
            loading: true,
            error_message: String::new(),
            ..state
        })
        .bind(SearchOp::SearchSucceeded, |state, payload| match payload {
            SearchPayload::Results(results) => SearchState {
                results,
                loading: false,
                error_message: String::new(),
                ..state
            },
            _ => state,
        })
        .bind(SearchOp::SearchFailed, |state, payload| match payload {
            SearchPayload::Failure(message) => SearchState {
                loading: false,
                error_message: message,
                ..state
            },
            _ => state,
        })
}
