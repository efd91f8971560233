//! Domain types for reelview
//!
//! Models organized by responsibility:
//! - `movie`: lookup results (records, summaries, result pages)
//! - `history`: durable search-history entries
//! - `query`: user search queries
//! - `common`: shared utilities

mod common;
mod history;
mod movie;
mod query;

// Re-export all public types
pub use common::Timestamp;
pub use history::{EntryId, HistoryEntry};
pub use movie::{LookupOutcome, MovieRecord, MovieSummary, ResultPage};
pub use query::SearchQuery;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_types_are_exported() {
        let _entry_id: EntryId = EntryId::new();
        let _query: SearchQuery = SearchQuery::new("test");
    }

    #[test]
    fn test_timestamp_ordering() {
        let t1 = Timestamp::now();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let t2 = Timestamp::now();
        assert!(t2 > t1);
    }
}
