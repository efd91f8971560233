//! Core domain types for reelview
//!
//! Shared models used by the provider, history, and session crates.

pub mod types;

pub use types::{
    EntryId, HistoryEntry, LookupOutcome, MovieRecord, MovieSummary, ResultPage, SearchQuery,
    Timestamp,
};
