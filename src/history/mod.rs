//! Recent searches: a small sibling area next to search.
//!
//! Exists on its own subtree with its own binding table; search events
//! pass through it untouched and vice versa.

mod actions;
mod op;
mod state;

pub use actions::HistoryActions;
pub use op::{HistoryOp, HistoryPayload};
pub use state::HistoryState;

use crate::app::AppState;
use crate::dispatch::Bindings;
use state::RECENT_CAP;

/// Binding table for the recent-searches subtree.
pub fn bindings() -> Bindings<HistoryState, HistoryOp, HistoryPayload> {
    Bindings::new().bind(HistoryOp::QueryRecorded, |state: HistoryState, payload| {
        let HistoryPayload::Query(query) = payload;
        let mut recent = state.recent;
        recent.retain(|entry| entry != &query);
        recent.insert(0, query);
        recent.truncate(RECENT_CAP);
        HistoryState { recent }
    })
}

/// Flat read surface: recent queries, newest first.
pub fn history_view(state: &AppState) -> Vec<String> {
    state.history.recent.clone()
}
