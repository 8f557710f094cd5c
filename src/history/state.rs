/// Most recent queries kept for display.
pub(crate) const RECENT_CAP: usize = 10;

/// State subtree for the recent-searches area.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryState {
    /// Newest first, bounded.
    pub recent: Vec<String>,
}
