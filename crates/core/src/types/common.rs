//! Common utilities shared across domain models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp in milliseconds since Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp for the current moment
    ///
    /// If system time is somehow before UNIX_EPOCH (should never happen),
    /// gracefully falls back to timestamp 0 instead of panicking.
    pub fn now() -> Self {
        Self(
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_else(|_| std::time::Duration::from_secs(0))
                .as_millis() as i64,
        )
    }

    /// Creates a timestamp from milliseconds since Unix epoch
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the timestamp as milliseconds since Unix epoch
    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Formats the time-of-day component as `HH:MM:SS` (UTC)
    ///
    /// Used by rendering layers to label history entries the way the
    /// sidebar shows them.
    pub fn clock_time(&self) -> String {
        let total_seconds = self.0.div_euclid(1000).rem_euclid(86_400);
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_now_is_positive() {
        assert!(Timestamp::now().as_millis() > 0);
    }

    #[test]
    fn test_timestamp_from_millis() {
        let t = Timestamp::from_millis(1_700_000_000_000);
        assert_eq!(t.as_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_clock_time_format() {
        // 1970-01-01 01:01:05 UTC
        let t = Timestamp::from_millis(3_665_000);
        assert_eq!(t.clock_time(), "01:01:05");
    }

    #[test]
    fn test_clock_time_wraps_at_midnight() {
        let t = Timestamp::from_millis(86_400_000 + 1_000);
        assert_eq!(t.clock_time(), "00:00:01");
    }
}
