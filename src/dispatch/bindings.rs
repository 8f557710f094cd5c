//! Setup-time binding table and the transition it compiles to.

use std::collections::HashMap;
use std::sync::Arc;

use super::event::{Event, Operation};

type BindFn<S, P> = Arc<dyn Fn(S, P) -> S + Send + Sync>;

/// Accumulates (operation, transition function) entries for one functional
/// area.
///
/// `bind` is fluent and last-wins: binding the same operation again replaces
/// the earlier entry without error. The table is mutable only through this
/// builder; [`Bindings::compile`] snapshots it into an immutable
/// [`Transition`].
pub struct Bindings<S, O: Operation, P> {
    entries: HashMap<O, BindFn<S, P>>,
}

impl<S, O: Operation, P> Bindings<S, O, P> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `f` as the transition for `op`. Last registration wins.
    pub fn bind<F>(mut self, op: O, f: F) -> Self
    where
        F: Fn(S, P) -> S + Send + Sync + 'static,
    {
        self.entries.insert(op, Arc::new(f));
        self
    }

    /// Finalize into a [`Transition`].
    ///
    /// The compiled transition snapshots the entries as of this call;
    /// binding afterwards affects later compiles only. Compiling twice
    /// yields identical behavior.
    pub fn compile(&self) -> Transition<S, O, P> {
        Transition {
            entries: Arc::new(self.entries.clone()),
        }
    }
}

impl<S, O: Operation, P> Default for Bindings<S, O, P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiled transition for one functional area.
///
/// An event whose operation was never bound returns the state unchanged:
/// partial wiring during incremental development is a no-op, not an error.
pub struct Transition<S, O: Operation, P> {
    entries: Arc<HashMap<O, BindFn<S, P>>>,
}

impl<S, O: Operation, P> Clone for Transition<S, O, P> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<S, O: Operation, P> Transition<S, O, P> {
    /// Fold one event into the state.
    pub fn apply(&self, state: S, event: Event<O, P>) -> S {
        match self.entries.get(&event.op) {
            Some(f) => f(state, event.payload),
            None => {
                tracing::debug!(op = ?event.op, "event has no binding, state unchanged");
                state
            }
        }
    }
}
