use crate::app::AppEvent;
use crate::dispatch::{Dispatcher, Event};

use super::op::{HistoryOp, HistoryPayload};

/// Operation group for the recent-searches area. Declarative only; no
/// external calls happen here.
#[derive(Clone)]
pub struct HistoryActions {
    dispatcher: Dispatcher<crate::app::AppState, AppEvent>,
}

impl HistoryActions {
    pub(crate) fn new(dispatcher: Dispatcher<crate::app::AppState, AppEvent>) -> Self {
        Self { dispatcher }
    }

    /// Remember a submitted query.
    pub fn record(&self, query: impl Into<String>) -> String {
        let query = query.into();
        self.dispatcher.commit(AppEvent::History(Event::new(
            HistoryOp::QueryRecorded,
            HistoryPayload::Query(query.clone()),
        )));
        query
    }
}
