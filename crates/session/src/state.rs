//! Live session state

use reelview_core::{MovieRecord, MovieSummary, SearchQuery};

/// What the session is currently doing
///
/// Carrying the selection and result list inside the variants makes the
/// "detail view and search form are never both rendered" rule structural.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    /// Showing the search form, nothing selected
    Idle,
    /// A lookup is in flight
    Searching,
    /// A single record is displayed
    Viewing(MovieRecord),
    /// A multi-result page is displayed
    ViewingList(Vec<MovieSummary>),
    /// The last action failed; message retained for display
    Errored(String),
}

/// The state a rendering layer draws from
///
/// Owned exclusively by one `SearchSession` and mutated only by its action
/// methods. Discarded when the session ends; only successful lookups
/// persist, via the history store.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSessionState {
    /// The last submitted query
    pub query: SearchQuery,
    /// Current page, always >= 1
    pub page: u32,
    /// Total pages for the current listing, always >= 1
    pub total_pages: u32,
    /// Current phase
    pub phase: SessionPhase,
}

impl Default for SearchSessionState {
    fn default() -> Self {
        Self {
            query: SearchQuery::default(),
            page: 1,
            total_pages: 1,
            phase: SessionPhase::Idle,
        }
    }
}

impl SearchSessionState {
    /// The record in the detail view, if one is displayed
    pub fn selection(&self) -> Option<&MovieRecord> {
        match &self.phase {
            SessionPhase::Viewing(record) => Some(record),
            _ => None,
        }
    }

    /// The summaries of the current listing page, if one is displayed
    pub fn results(&self) -> Option<&[MovieSummary]> {
        match &self.phase {
            SessionPhase::ViewingList(summaries) => Some(summaries),
            _ => None,
        }
    }

    /// The retained error message, if the last action failed
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            SessionPhase::Errored(message) => Some(message),
            _ => None,
        }
    }

    /// True when the search form should be shown
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, SessionPhase::Idle)
    }

    /// True when a lookup is in flight
    pub fn is_searching(&self) -> bool {
        matches!(self.phase, SessionPhase::Searching)
    }
}
