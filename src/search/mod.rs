//! Product search: the canonical orchestration workflow.
//!
//! One declarative operation per state change, one imperative operation
//! ([`SearchActions::search`]) orchestrating them around a proxy read.
//! The request lifecycle is carried by the `loading` flag: set by the
//! pending signal before the await, cleared by whichever terminal event
//! applies. Idle is the absence of the flag, not an event.

mod actions;
mod bindings;
mod catalog;
mod op;
mod state;
mod view;

pub use actions::SearchActions;
pub use bindings::bindings;
pub use catalog::demo_catalog;
pub use op::{SearchOp, SearchPayload};
pub use state::{Product, SearchState};
pub use view::{search_view, SearchView};
