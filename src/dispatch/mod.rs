//! Typed event dispatch.
//!
//! ```text
//! Operation ──bind──→ Bindings ──compile──→ Transition
//!                                               │
//! Event (op, payload) ──→ Dispatcher ──────────apply──→ Store
//! ```
//!
//! - **Operation**: stable identity of a declarative operation, one enum
//!   variant per operation — the dispatch key, never a string
//! - **Bindings**: setup-time table from operation to transition function
//! - **Transition**: the compiled, immutable per-area transition
//! - **Dispatcher**: commits top-level events through the store

mod bindings;
mod dispatcher;
mod event;

pub use bindings::{Bindings, Transition};
pub use dispatcher::Dispatcher;
pub use event::{Event, Operation};
