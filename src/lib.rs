//! Unidirectional state-dispatch runtime.
//!
//! ```text
//! operation group ──event──→ dispatcher ──transition──→ store ──→ observers
//!        │                                                ▲
//!        └── service proxy (awaited) ──→ success/failure events
//! ```
//!
//! Declarative operations compute a payload, commit one labeled event, and
//! return the payload. A compiled binding table folds each event into its
//! area's state subtree; sibling subtrees pass through untouched. Imperative
//! operations orchestrate declarative ones around awaited [`proxy`] calls,
//! absorbing resolution failures into state instead of returning them.
//!
//! The proxy is a capability boundary: the same orchestration code runs
//! against the in-memory [`SimulatedProxy`] or a real [`HttpProxy`], chosen
//! once at composition time.

pub mod app;
pub mod config;
pub mod dispatch;
pub mod history;
pub mod proxy;
pub mod search;
pub mod store;

pub use app::{App, AppEvent, AppState};
pub use dispatch::{Bindings, Dispatcher, Event, Operation, Transition};
pub use proxy::{HttpProxy, ProxyError, ServiceProxy, SimulatedProxy};
pub use store::{ObserverId, Store};
