//! The single write path into the store.

use std::fmt;
use std::sync::Arc;

use crate::store::Store;

type RootTransition<S, E> = Arc<dyn Fn(S, E) -> S + Send + Sync>;

/// Commits events to the store through the combined top-level transition.
///
/// Operation groups construct an event and hand it here; nothing outside
/// the compiled transitions mutates state.
pub struct Dispatcher<S, E> {
    store: Arc<Store<S>>,
    transition: RootTransition<S, E>,
}

impl<S, E> Clone for Dispatcher<S, E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            transition: Arc::clone(&self.transition),
        }
    }
}

impl<S, E> Dispatcher<S, E>
where
    S: Clone,
    E: fmt::Debug,
{
    pub fn new<F>(store: Arc<Store<S>>, transition: F) -> Self
    where
        F: Fn(S, E) -> S + Send + Sync + 'static,
    {
        Self {
            store,
            transition: Arc::new(transition),
        }
    }

    /// Apply `event` to the store synchronously. By the time this returns,
    /// the new state is in place and every observer has run.
    pub fn commit(&self, event: E) {
        tracing::debug!(event = ?event, "commit");
        let transition = Arc::clone(&self.transition);
        self.store.apply(move |state| transition(state, event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_runs_transition_against_current_state() {
        let store = Arc::new(Store::new(10i64));
        let dispatcher = Dispatcher::new(Arc::clone(&store), |state: i64, delta: i64| state + delta);

        dispatcher.commit(5);
        dispatcher.commit(-3);
        assert_eq!(store.state(), 12);
    }

    #[test]
    fn commit_notifies_observers_before_returning() {
        let store = Arc::new(Store::new(0i64));
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |state| sink.lock().push(*state));

        let dispatcher = Dispatcher::new(Arc::clone(&store), |_, next: i64| next);
        dispatcher.commit(42);
        assert_eq!(*seen.lock(), vec![42]);
    }
}
