//! Shared state container.
//!
//! One state value behind a lock. Every mutation goes through
//! [`Store::apply`], which replaces the value wholesale with the result of a
//! transition function and then notifies observers with the fresh snapshot.
//! Applications are serialized: an `apply` call, notification included,
//! finishes before the next one starts, even when triggered from several
//! tasks at once.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// Token identifying a subscribed observer. Returned by [`Store::subscribe`],
/// consumed by [`Store::unsubscribe`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ObserverId(u64);

type ObserverFn<S> = Arc<dyn Fn(&S) + Send + Sync>;

pub struct Store<S> {
    state: Mutex<S>,
    observers: Mutex<Vec<(ObserverId, ObserverFn<S>)>>,
    next_observer: AtomicU64,
    /// Held across replace + notify so applications never overlap.
    apply_gate: Mutex<()>,
}

impl<S: Clone> Store<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: Mutex::new(initial),
            observers: Mutex::new(Vec::new()),
            next_observer: AtomicU64::new(0),
            apply_gate: Mutex::new(()),
        }
    }

    /// Current snapshot. No side effects.
    pub fn state(&self) -> S {
        self.state.lock().clone()
    }

    /// Replace the state with `transition(current)`, then notify observers
    /// in subscription order with the new snapshot.
    ///
    /// Observers may read [`Store::state`] freely; they must not trigger a
    /// nested `apply` from inside the notification, which would deadlock on
    /// the gate.
    pub fn apply<F>(&self, transition: F)
    where
        F: FnOnce(S) -> S,
    {
        let _gate = self.apply_gate.lock();
        let snapshot = {
            let mut state = self.state.lock();
            let next = transition(state.clone());
            *state = next.clone();
            next
        };
        let observers: Vec<ObserverFn<S>> = self
            .observers
            .lock()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer(&snapshot);
        }
    }

    /// Register `observer` to run after every applied transition.
    pub fn subscribe<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let id = ObserverId(self.next_observer.fetch_add(1, Ordering::Relaxed));
        self.observers.lock().push((id, Arc::new(observer)));
        id
    }

    /// Remove a previously subscribed observer. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: ObserverId) {
        self.observers.lock().retain(|(oid, _)| *oid != id);
    }
}
