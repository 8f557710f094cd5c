use std::sync::Arc;

use crate::app::{AppEvent, AppState};
use crate::dispatch::{Dispatcher, Event};
use crate::proxy::{ProxyError, ServiceProxy};
use crate::store::Store;

use super::op::{SearchOp, SearchPayload};
use super::state::Product;

/// Operation group for the search area.
///
/// Declarative operations each commit one labeled event synchronously and
/// return their payload. [`SearchActions::search`] is the imperative
/// operation: it orchestrates the declarative ones around an awaited proxy
/// call. Overlapping `search` invocations are permitted; callers wanting
/// exclusivity serialize invocations themselves.
#[derive(Clone)]
pub struct SearchActions {
    store: Arc<Store<AppState>>,
    dispatcher: Dispatcher<AppState, AppEvent>,
    proxy: Arc<dyn ServiceProxy>,
}

impl SearchActions {
    pub(crate) fn new(
        store: Arc<Store<AppState>>,
        dispatcher: Dispatcher<AppState, AppEvent>,
        proxy: Arc<dyn ServiceProxy>,
    ) -> Self {
        Self {
            store,
            dispatcher,
            proxy,
        }
    }

    fn commit(&self, op: SearchOp, payload: SearchPayload) {
        self.dispatcher.commit(AppEvent::Search(Event::new(op, payload)));
    }

    /// The collaborator typed new query text.
    pub fn query_changed(&self, query: impl Into<String>) -> String {
        let query = query.into();
        self.commit(SearchOp::QueryChanged, SearchPayload::Query(query.clone()));
        query
    }

    /// Signal that a search is in flight.
    pub fn search_started(&self) {
        self.commit(SearchOp::SearchStarted, SearchPayload::Empty);
    }

    /// Record the products a completed search produced.
    pub fn search_succeeded(&self, results: Vec<Product>) -> Vec<Product> {
        self.commit(
            SearchOp::SearchSucceeded,
            SearchPayload::Results(results.clone()),
        );
        results
    }

    /// Record a failed search.
    pub fn search_failed(&self, message: impl Into<String>) -> String {
        let message = message.into();
        self.commit(
            SearchOp::SearchFailed,
            SearchPayload::Failure(message.clone()),
        );
        message
    }

    /// Search the catalog for the current query text.
    ///
    /// Emits the pending signal before awaiting the proxy, then one of the
    /// terminal events once it resolves. Resolution failures become state,
    /// visible as `error_message`; they are not returned. The only `Err`
    /// this produces is a mis-wired route table — a setup defect the
    /// collaborator cannot handle by rendering.
    ///
    /// There is no timeout: a proxy call that never resolves leaves the
    /// search pending.
    pub async fn search(&self) -> Result<(), ProxyError> {
        let query = self.store.state().search.query;
        self.search_started();
        let address = format!("/products/search/{query}");

        match self.proxy.read(&address).await {
            Ok(value) => match serde_json::from_value::<Vec<Product>>(value) {
                Ok(results) => {
                    self.search_succeeded(results);
                }
                Err(err) => {
                    tracing::warn!(%err, "search result body malformed");
                    self.search_failed(err.to_string());
                }
            },
            Err(err) if err.is_setup_defect() => return Err(err),
            Err(err) => {
                tracing::warn!(%err, "search failed");
                self.search_failed(err.to_string());
            }
        }
        Ok(())
    }
}
