//! Movie lookup result models

use serde::{Deserialize, Serialize};

/// Placeholder used when the provider omits a title
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Fallback shown when a record carries no plot
pub const NO_PLOT: &str = "Plot not available.";

/// Number of summaries the provider returns per listing page
pub const PAGE_SIZE: u32 = 10;

/// A fully detailed movie record from a successful lookup
///
/// Immutable once constructed. Optional provider fields are normalized at
/// construction so rendering never has to deal with missing data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Movie title, never empty
    pub title: String,

    /// Release year, "Unknown" when the provider omits it
    #[serde(default = "unknown")]
    pub year: String,

    /// Director name(s), "Unknown" when the provider omits it
    #[serde(default = "unknown")]
    pub director: String,

    /// Plot synopsis, if the provider supplied one
    #[serde(default)]
    pub plot: Option<String>,

    /// Comma-separated cast list, may be empty
    #[serde(default)]
    pub cast: String,

    /// Rating string, "Not rated" when the provider omits it
    #[serde(default = "not_rated")]
    pub rating: String,

    /// Poster image URL, if one exists
    #[serde(default)]
    pub poster_url: Option<String>,

    /// External identifier used to build the detail link
    #[serde(default)]
    pub imdb_id: String,
}

fn unknown() -> String {
    "Unknown".to_string()
}

fn not_rated() -> String {
    "Not rated".to_string()
}

impl MovieRecord {
    /// Creates a record with required fields and default fallbacks
    ///
    /// An empty title is replaced by the placeholder so the "title is
    /// always present" invariant holds no matter what the provider sent.
    pub fn new(title: impl Into<String>, imdb_id: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            title: if title.is_empty() {
                UNKNOWN_TITLE.to_string()
            } else {
                title
            },
            year: unknown(),
            director: unknown(),
            plot: None,
            cast: String::new(),
            rating: not_rated(),
            poster_url: None,
            imdb_id: imdb_id.into(),
        }
    }

    /// Returns the plot, or the fallback text when none is available
    pub fn plot_text(&self) -> &str {
        match self.plot.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => NO_PLOT,
        }
    }

    /// Builds the external IMDb detail link for this record
    pub fn imdb_url(&self) -> String {
        format!("https://www.imdb.com/title/{}", self.imdb_id)
    }
}

/// A condensed entry on a multi-result listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Movie title, never empty
    pub title: String,

    /// Release year, "Unknown" when the provider omits it
    #[serde(default = "unknown")]
    pub year: String,

    /// Poster image URL, if one exists
    #[serde(default)]
    pub poster_url: Option<String>,

    /// External identifier
    #[serde(default)]
    pub imdb_id: String,
}

impl MovieSummary {
    /// Creates a summary with required fields and default fallbacks
    pub fn new(title: impl Into<String>, imdb_id: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            title: if title.is_empty() {
                UNKNOWN_TITLE.to_string()
            } else {
                title
            },
            year: unknown(),
            poster_url: None,
            imdb_id: imdb_id.into(),
        }
    }
}

/// One page of a multi-result listing, with pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPage {
    /// Summaries on this page, in provider order
    pub summaries: Vec<MovieSummary>,

    /// Current page number, 1-based
    pub page: u32,

    /// Total number of pages for the query
    pub total_pages: u32,
}

impl ResultPage {
    /// Builds a page from a provider listing and its total result count
    ///
    /// `total_pages` is derived at the provider's fixed page size; a listing
    /// always spans at least one page.
    pub fn from_total_results(summaries: Vec<MovieSummary>, page: u32, total_results: u32) -> Self {
        let total_pages = total_results.div_ceil(PAGE_SIZE).max(1);
        Self {
            summaries,
            page: page.max(1),
            total_pages,
        }
    }
}

/// The two success shapes a lookup can produce
///
/// A title lookup resolves to either one best-match record or a page of
/// candidate summaries; callers must handle both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A single best-match record
    Single(MovieRecord),
    /// A page of candidate summaries
    Page(ResultPage),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults() {
        let record = MovieRecord::new("Inception", "tt1375666");
        assert_eq!(record.title, "Inception");
        assert_eq!(record.year, "Unknown");
        assert_eq!(record.director, "Unknown");
        assert_eq!(record.rating, "Not rated");
        assert!(record.plot.is_none());
        assert!(record.poster_url.is_none());
        assert!(record.cast.is_empty());
    }

    #[test]
    fn test_empty_title_gets_placeholder() {
        let record = MovieRecord::new("", "tt0000000");
        assert_eq!(record.title, UNKNOWN_TITLE);

        let summary = MovieSummary::new("", "tt0000000");
        assert_eq!(summary.title, UNKNOWN_TITLE);
    }

    #[test]
    fn test_plot_text_fallback() {
        let mut record = MovieRecord::new("Test", "tt1");
        assert_eq!(record.plot_text(), NO_PLOT);

        record.plot = Some(String::new());
        assert_eq!(record.plot_text(), NO_PLOT);

        record.plot = Some("A thief enters dreams.".to_string());
        assert_eq!(record.plot_text(), "A thief enters dreams.");
    }

    #[test]
    fn test_imdb_url() {
        let record = MovieRecord::new("Inception", "tt1375666");
        assert_eq!(record.imdb_url(), "https://www.imdb.com/title/tt1375666");
    }

    #[test]
    fn test_result_page_total_pages() {
        let page = ResultPage::from_total_results(Vec::new(), 1, 25);
        assert_eq!(page.total_pages, 3);

        let page = ResultPage::from_total_results(Vec::new(), 1, 10);
        assert_eq!(page.total_pages, 1);

        let page = ResultPage::from_total_results(Vec::new(), 1, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_result_page_clamps_page_number() {
        let page = ResultPage::from_total_results(Vec::new(), 0, 5);
        assert_eq!(page.page, 1);
    }
}
