use serde::{Deserialize, Serialize};

/// State subtree for the search area.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Text the collaborator last typed.
    pub query: String,
    /// Results of the last completed search.
    pub results: Vec<Product>,
    /// True while a search is awaiting the proxy.
    pub loading: bool,
    /// Failure description from the last search; empty when none.
    pub error_message: String,
}

/// A catalog product as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price_cents: u64,
}
