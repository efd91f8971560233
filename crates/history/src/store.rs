//! History store operations

use crate::connection::{connect, HistoryDbConfig};
use crate::error::{StoreError, StoreResult};
use crate::migrations::run_migrations;
use crate::DbPool;
use async_trait::async_trait;
use log::debug;
use reelview_core::{EntryId, HistoryEntry, MovieRecord, Timestamp};
use sqlx::Row;

/// A durable, append-only log of past successful searches
///
/// `insert` never rejects on content; `list_recent` is read-only and an
/// empty store yields an empty sequence, not an error.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Appends an entry, returning its store-assigned id
    async fn insert(&self, entry: &HistoryEntry) -> StoreResult<EntryId>;

    /// Lists up to `limit` entries, newest first
    async fn list_recent(&self, limit: u32) -> StoreResult<Vec<HistoryEntry>>;
}

/// SQLite-backed history store
///
/// Clones share one pool; the pool serializes concurrent appends so no
/// writes are lost.
#[derive(Clone)]
pub struct SqliteHistoryStore {
    pool: DbPool,
}

impl SqliteHistoryStore {
    /// Wraps an existing connection pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Connects to the configured database and runs migrations
    pub async fn open(config: HistoryDbConfig) -> StoreResult<Self> {
        let pool = connect(config).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Returns the underlying pool
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl HistoryStore for SqliteHistoryStore {
    async fn insert(&self, entry: &HistoryEntry) -> StoreResult<EntryId> {
        let record_json = serde_json::to_string(&entry.record)
            .map_err(|e| StoreError::unavailable("Failed to serialize record", e))?;

        let id = EntryId::new();
        sqlx::query(
            r#"
            INSERT INTO search_history (id, title, timestamp_ms, record)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(id.as_string())
        .bind(&entry.title)
        .bind(entry.timestamp.as_millis())
        .bind(record_json)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::unavailable("Failed to insert history entry", e))?;

        debug!("recorded search history entry {} ({})", id, entry.title);
        Ok(id)
    }

    async fn list_recent(&self, limit: u32) -> StoreResult<Vec<HistoryEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT title, timestamp_ms, record
            FROM search_history
            ORDER BY timestamp_ms DESC, rowid DESC
            LIMIT ?
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::unavailable("Failed to list history entries", e))?;

        rows.into_iter().map(row_to_entry).collect()
    }
}

/// Converts a database row into a history entry
fn row_to_entry(row: sqlx::sqlite::SqliteRow) -> StoreResult<HistoryEntry> {
    let title: String = row
        .try_get("title")
        .map_err(|e| StoreError::unavailable("Failed to read title column", e))?;
    let timestamp_ms: i64 = row
        .try_get("timestamp_ms")
        .map_err(|e| StoreError::unavailable("Failed to read timestamp column", e))?;
    let record_json: String = row
        .try_get("record")
        .map_err(|e| StoreError::unavailable("Failed to read record column", e))?;

    let record: MovieRecord = serde_json::from_str(&record_json)
        .map_err(|e| StoreError::unavailable("Failed to deserialize record", e))?;

    let mut entry = HistoryEntry::with_timestamp(record, Timestamp::from_millis(timestamp_ms));
    // The stored column is authoritative over the payload's title
    entry.title = title;
    Ok(entry)
}
