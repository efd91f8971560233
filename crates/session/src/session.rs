//! Search session state machine

use crate::error::{SessionError, SessionResult};
use crate::state::{SearchSessionState, SessionPhase};
use log::{debug, info, warn};
use reelview_core::{HistoryEntry, LookupOutcome, MovieRecord, SearchQuery};
use reelview_history::{HistoryStore, StoreResult};
use reelview_provider::MetadataProvider;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// One user's live search-and-navigation flow
///
/// Owns its `SearchSessionState` exclusively. Every action takes `&mut self`
/// and the provider call is the sole suspension point, so no other action
/// can interleave against stale results while a lookup is in flight. The
/// history store is the only shared resource; inserts are issued as spawned
/// tasks after the user-visible transition and their failure never rolls the
/// transition back.
pub struct SearchSession<P, H> {
    provider: P,
    history: Arc<H>,
    state: SearchSessionState,
    pending_insert: Option<JoinHandle<()>>,
}

impl<P, H> SearchSession<P, H>
where
    P: MetadataProvider,
    H: HistoryStore + 'static,
{
    /// Creates a session with default state
    pub fn new(provider: P, history: Arc<H>) -> Self {
        Self {
            provider,
            history,
            state: SearchSessionState::default(),
            pending_insert: None,
        }
    }

    /// The state a rendering layer should draw from
    pub fn state(&self) -> &SearchSessionState {
        &self.state
    }

    /// Submits a new search
    ///
    /// Requires a non-empty title. A query differing from the last submitted
    /// one resets the page to 1. Clears any prior error or selection. On a
    /// single-record success the result is recorded to history best-effort;
    /// a store failure is logged and never surfaces here.
    pub async fn submit_search(
        &mut self,
        query: SearchQuery,
    ) -> SessionResult<&SearchSessionState> {
        if query.is_empty() {
            return Err(SessionError::EmptyTitle);
        }

        if query != self.state.query {
            self.state.page = 1;
        }
        self.state.query = query;

        self.run_lookup().await;
        Ok(&self.state)
    }

    /// Advances to the next listing page, if there is one
    ///
    /// A no-op outside `ViewingList` or at the last page.
    pub async fn next_page(&mut self) -> &SearchSessionState {
        if matches!(self.state.phase, SessionPhase::ViewingList(_))
            && self.state.page < self.state.total_pages
        {
            self.state.page += 1;
            self.run_lookup().await;
        }
        &self.state
    }

    /// Returns to the previous listing page, if there is one
    ///
    /// A no-op outside `ViewingList` or at page 1.
    pub async fn previous_page(&mut self) -> &SearchSessionState {
        if matches!(self.state.phase, SessionPhase::ViewingList(_)) && self.state.page > 1 {
            self.state.page -= 1;
            self.run_lookup().await;
        }
        &self.state
    }

    /// Returns to the search form, clearing the selection or listing
    pub fn back(&mut self) -> &SearchSessionState {
        match self.state.phase {
            SessionPhase::Viewing(_) | SessionPhase::ViewingList(_) | SessionPhase::Errored(_) => {
                self.state.phase = SessionPhase::Idle;
            }
            _ => {}
        }
        &self.state
    }

    /// Replays a stored result into the detail view
    ///
    /// No provider call, no history insert, page untouched: this is a replay
    /// of a past search, not a new one.
    pub fn select_from_history(&mut self, entry: &HistoryEntry) -> &SearchSessionState {
        debug!("replaying history entry \"{}\"", entry.title);
        self.state.phase = SessionPhase::Viewing(entry.record.clone());
        &self.state
    }

    /// Lists the most recent history entries for a sidebar
    pub async fn recent_searches(&self, limit: u32) -> StoreResult<Vec<HistoryEntry>> {
        self.history.list_recent(limit).await
    }

    /// Waits for the most recently issued history insert to settle
    ///
    /// The insert stays non-blocking with respect to the lookup result;
    /// this exists for orderly shutdown.
    pub async fn flush_history(&mut self) {
        if let Some(handle) = self.pending_insert.take() {
            if let Err(e) = handle.await {
                warn!("history insert task failed: {}", e);
            }
        }
    }

    /// Issues the lookup for the current query and page
    async fn run_lookup(&mut self) {
        self.state.phase = SessionPhase::Searching;
        debug!(
            "looking up \"{}\" (page {})",
            self.state.query.title, self.state.page
        );

        let result = self
            .provider
            .lookup(&self.state.query, self.state.page)
            .await;

        match result {
            Ok(LookupOutcome::Single(record)) => {
                info!("lookup resolved to \"{}\"", record.title);
                self.state.phase = SessionPhase::Viewing(record.clone());
                self.record_history(record);
            }
            Ok(LookupOutcome::Page(page)) => {
                info!(
                    "lookup resolved to {} results (page {} of {})",
                    page.summaries.len(),
                    page.page,
                    page.total_pages
                );
                self.state.total_pages = page.total_pages;
                self.state.page = page.page.min(page.total_pages);
                self.state.phase = SessionPhase::ViewingList(page.summaries);
            }
            Err(e) => {
                warn!("lookup failed: {}", e);
                self.state.phase = SessionPhase::Errored(e.to_string());
            }
        }
    }

    /// Records a successful lookup to history, fire-and-forget
    fn record_history(&mut self, record: MovieRecord) {
        let store = Arc::clone(&self.history);
        let entry = HistoryEntry::new(record);
        self.pending_insert = Some(tokio::spawn(async move {
            if let Err(e) = store.insert(&entry).await {
                warn!("failed to record search history: {}", e);
            }
        }));
    }
}
