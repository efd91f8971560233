//! reelview history layer
//!
//! Durable log of past successful searches, backed by SQLite via sqlx.
//! Supports two operations: append an entry, and list the N most recent.

pub mod connection;
pub mod error;
pub mod migrations;
pub mod store;

pub use connection::{DbPool, HistoryDbConfig};
pub use error::{StoreError, StoreResult};
pub use migrations::{current_version, run_migrations, verify_integrity};
pub use store::{HistoryStore, SqliteHistoryStore};

#[cfg(test)]
mod tests {
    use super::*;
    use connection::create_test_db;
    use reelview_core::{HistoryEntry, MovieRecord, Timestamp};

    async fn test_store() -> SqliteHistoryStore {
        let pool = create_test_db().await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteHistoryStore::new(pool)
    }

    fn sample_record() -> MovieRecord {
        let mut record = MovieRecord::new("Inception", "tt1375666");
        record.year = "2010".to_string();
        record.director = "Christopher Nolan".to_string();
        record.plot = Some("A thief who steals corporate secrets.".to_string());
        record.cast = "Leonardo DiCaprio, Elliot Page".to_string();
        record.rating = "8.8".to_string();
        record.poster_url = Some("https://example.com/inception.jpg".to_string());
        record
    }

    #[tokio::test]
    async fn test_insert_and_round_trip() {
        let store = test_store().await;
        let record = sample_record();

        let entry = HistoryEntry::new(record.clone());
        store.insert(&entry).await.unwrap();

        let recent = store.list_recent(1).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].title, "Inception");
        assert_eq!(recent[0].record, record);
        assert_eq!(recent[0].timestamp, entry.timestamp);
    }

    #[tokio::test]
    async fn test_list_recent_newest_first() {
        let store = test_store().await;

        for (i, title) in ["First", "Second", "Third"].iter().enumerate() {
            let entry = HistoryEntry::with_timestamp(
                MovieRecord::new(*title, format!("tt{}", i)),
                Timestamp::from_millis(1_000 + i as i64),
            );
            store.insert(&entry).await.unwrap();
        }

        let recent = store.list_recent(5).await.unwrap();
        let titles: Vec<&str> = recent.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);
    }

    #[tokio::test]
    async fn test_list_recent_respects_limit() {
        let store = test_store().await;

        for i in 0..10 {
            let entry = HistoryEntry::with_timestamp(
                MovieRecord::new(format!("Movie {}", i), format!("tt{}", i)),
                Timestamp::from_millis(i),
            );
            store.insert(&entry).await.unwrap();
        }

        let recent = store.list_recent(5).await.unwrap();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].title, "Movie 9");
    }

    #[tokio::test]
    async fn test_empty_store_lists_empty() {
        let store = test_store().await;
        let recent = store.list_recent(5).await.unwrap();
        assert!(recent.is_empty());
    }

    #[tokio::test]
    async fn test_same_millisecond_inserts_keep_insertion_order() {
        let store = test_store().await;
        let stamp = Timestamp::from_millis(5_000);

        for title in ["A", "B", "C"] {
            let entry =
                HistoryEntry::with_timestamp(MovieRecord::new(title, "tt0"), stamp);
            store.insert(&entry).await.unwrap();
        }

        let recent = store.list_recent(3).await.unwrap();
        let titles: Vec<&str> = recent.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }
}
