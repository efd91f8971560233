//! Database migrations

use crate::error::{StoreError, StoreResult};
use crate::DbPool;

/// Migration 001: Search history table
const MIGRATION_001: &str = include_str!("../migrations/001_search_history.sql");

/// Migration 002: Timestamp index
const MIGRATION_002: &str = include_str!("../migrations/002_timestamp_index.sql");

/// Current database schema version
pub const CURRENT_VERSION: i64 = 2;

/// Returns the current migration version
pub fn current_version() -> i64 {
    CURRENT_VERSION
}

/// Runs all pending migrations
pub async fn run_migrations(pool: &DbPool) -> StoreResult<()> {
    // Create migrations table if it doesn't exist
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StoreError::unavailable("Failed to create migrations table", e))?;

    run_migration(pool, 1, MIGRATION_001).await?;
    run_migration(pool, 2, MIGRATION_002).await?;

    Ok(())
}

/// Runs a single migration if not already applied
async fn run_migration(pool: &DbPool, version: i64, sql: &str) -> StoreResult<()> {
    let applied: Option<i64> =
        sqlx::query_scalar("SELECT version FROM schema_migrations WHERE version = ?")
            .bind(version)
            .fetch_optional(pool)
            .await
            .map_err(|e| StoreError::unavailable("Failed to check migration status", e))?;

    if applied.is_some() {
        return Ok(());
    }

    sqlx::query(sql)
        .execute(pool)
        .await
        .map_err(|e| {
            StoreError::unavailable(&format!("Failed to run migration {}", version), e)
        })?;

    sqlx::query("INSERT INTO schema_migrations (version) VALUES (?)")
        .bind(version)
        .execute(pool)
        .await
        .map_err(|e| {
            StoreError::unavailable(&format!("Failed to record migration {}", version), e)
        })?;

    Ok(())
}

/// Verifies database integrity
pub async fn verify_integrity(pool: &DbPool) -> StoreResult<()> {
    let result: String = sqlx::query_scalar("PRAGMA integrity_check")
        .fetch_one(pool)
        .await
        .map_err(|e| StoreError::unavailable("Failed to check integrity", e))?;

    if result != "ok" {
        return Err(StoreError::Unavailable(format!(
            "Database integrity check failed: {}",
            result
        )));
    }

    Ok(())
}
