use crate::app::AppState;

use super::state::Product;

/// Flat read surface for the search area, recomputed by the collaborator
/// after every state change.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub query: String,
    pub results: Vec<Product>,
    pub loading: bool,
    pub error_message: String,
}

/// Project the full state down to what a search screen renders.
pub fn search_view(state: &AppState) -> SearchView {
    let search = &state.search;
    SearchView {
        query: search.query.clone(),
        results: search.results.clone(),
        loading: search.loading,
        error_message: search.error_message.clone(),
    }
}
