//! User search queries

/// A title search with optional filters
///
/// Unset filters are omitted from the outbound provider request rather than
/// sent as empty values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    /// Movie title to look up
    pub title: String,
    /// Optional release-year filter
    pub year: Option<String>,
    /// Optional genre filter
    pub genre: Option<String>,
}

impl SearchQuery {
    /// Creates a query for a title with no filters
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: None,
            genre: None,
        }
    }

    /// Sets the release-year filter
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Sets the genre filter
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Returns true when no title has been entered
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder() {
        let query = SearchQuery::new("Inception")
            .with_year("2010")
            .with_genre("Thriller");

        assert_eq!(query.title, "Inception");
        assert_eq!(query.year, Some("2010".to_string()));
        assert_eq!(query.genre, Some("Thriller".to_string()));
    }

    #[test]
    fn test_query_defaults() {
        let query = SearchQuery::new("Heat");
        assert_eq!(query.year, None);
        assert_eq!(query.genre, None);
        assert!(!query.is_empty());
    }

    #[test]
    fn test_empty_query() {
        assert!(SearchQuery::new("").is_empty());
        assert!(SearchQuery::new("   ").is_empty());
        assert!(SearchQuery::default().is_empty());
    }
}
