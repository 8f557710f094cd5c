//! Composition root: one state tree, one event type, one store.

use std::sync::Arc;

use crate::config::{select_proxy, Config, ConfigError};
use crate::dispatch::{Dispatcher, Event};
use crate::history::{self, HistoryActions, HistoryOp, HistoryPayload, HistoryState};
use crate::proxy::ServiceProxy;
use crate::search::{self, SearchActions, SearchOp, SearchPayload, SearchState};
use crate::store::Store;

/// Full application state: exactly one subtree per functional area.
/// Replaced wholesale on every applied transition, never mutated in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub search: SearchState,
    pub history: HistoryState,
}

/// Top-level event. Each event targets exactly one area's subtree.
#[derive(Clone, Debug)]
pub enum AppEvent {
    Search(Event<SearchOp, SearchPayload>),
    History(Event<HistoryOp, HistoryPayload>),
}

/// Combine the per-area compiled transitions into the one top-level
/// transition the store consumes. Each area's subtree is mapped
/// independently; sibling subtrees pass through untouched.
fn combined_transition() -> impl Fn(AppState, AppEvent) -> AppState {
    let search = search::bindings().compile();
    let history = history::bindings().compile();
    move |state, event| match event {
        AppEvent::Search(event) => AppState {
            search: search.apply(state.search, event),
            ..state
        },
        AppEvent::History(event) => AppState {
            history: history.apply(state.history, event),
            ..state
        },
    }
}

/// The assembled runtime.
///
/// A UI collaborator holds an `App`, invokes operations on the groups, and
/// re-reads projections after every change — the only two touch points.
pub struct App {
    store: Arc<Store<AppState>>,
    pub search: SearchActions,
    pub history: HistoryActions,
}

impl App {
    /// Wire the store, dispatcher, and operation groups around `proxy`.
    ///
    /// Swapping the proxy implementation changes nothing here or in the
    /// operation groups.
    pub fn new(proxy: Arc<dyn ServiceProxy>) -> Self {
        let store = Arc::new(Store::new(AppState::default()));
        let dispatcher = Dispatcher::new(Arc::clone(&store), combined_transition());
        let search = SearchActions::new(Arc::clone(&store), dispatcher.clone(), proxy);
        let history = HistoryActions::new(dispatcher);
        Self {
            store,
            search,
            history,
        }
    }

    /// Assemble from configuration, selecting the proxy it names.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(select_proxy(config)?))
    }

    /// The shared store, for subscriptions and snapshots.
    pub fn store(&self) -> &Arc<Store<AppState>> {
        &self.store
    }
}
