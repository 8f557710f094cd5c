use crate::dispatch::Operation;

/// Identities of the history area's declarative operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HistoryOp {
    QueryRecorded,
}

impl Operation for HistoryOp {}

/// Payload carried by a history event.
#[derive(Clone, Debug)]
pub enum HistoryPayload {
    Query(String),
}
