//! Search-history domain models

use crate::types::{MovieRecord, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Creates a new random EntryId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an EntryId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Returns the EntryId as a string
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A durable record of one past successful search
///
/// Entries are append-only: created when a lookup succeeds, never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Title of the record the search resolved to
    pub title: String,

    /// When the entry was created, assigned at construction
    pub timestamp: Timestamp,

    /// The full record the search produced
    pub record: MovieRecord,
}

impl HistoryEntry {
    /// Creates an entry for a record, stamped with the current time
    pub fn new(record: MovieRecord) -> Self {
        Self {
            title: record.title.clone(),
            timestamp: Timestamp::now(),
            record,
        }
    }

    /// Creates an entry with an explicit timestamp
    pub fn with_timestamp(record: MovieRecord, timestamp: Timestamp) -> Self {
        Self {
            title: record.title.clone(),
            timestamp,
            record,
        }
    }
}
