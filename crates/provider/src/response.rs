//! Provider wire format
//!
//! The provider speaks JSON with PascalCase fields and uses the string
//! `"N/A"` as a missing-value sentinel. Everything here normalizes that
//! shape into core domain types.

use crate::error::{LookupError, LookupResult};
use reelview_core::{LookupOutcome, MovieRecord, MovieSummary, ResultPage};
use serde::Deserialize;

/// Top-level provider response
///
/// Success bodies carry either a single record (flattened fields) or a
/// `Search` listing with a total-result count. Failure bodies set
/// `Response: "False"` and an error message.
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderEnvelope {
    #[serde(rename = "Response", default)]
    response: String,

    #[serde(rename = "Error", default)]
    #[allow(dead_code)]
    error: Option<String>,

    #[serde(rename = "Search", default)]
    search: Option<Vec<ListingItem>>,

    #[serde(rename = "totalResults", default)]
    total_results: Option<String>,

    #[serde(flatten)]
    movie: MovieFields,
}

/// Fields of a single-record response
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MovieFields {
    #[serde(rename = "Title", default)]
    title: String,

    #[serde(rename = "Year", default)]
    year: String,

    #[serde(rename = "Director", default)]
    director: String,

    #[serde(rename = "Plot", default)]
    plot: String,

    #[serde(rename = "Actors", default)]
    actors: String,

    #[serde(rename = "imdbRating", default)]
    imdb_rating: String,

    #[serde(rename = "Poster", default)]
    poster: String,

    #[serde(rename = "imdbID", default)]
    imdb_id: String,
}

/// One entry of a `Search` listing
#[derive(Debug, Deserialize)]
pub(crate) struct ListingItem {
    #[serde(rename = "Title", default)]
    title: String,

    #[serde(rename = "Year", default)]
    year: String,

    #[serde(rename = "Poster", default)]
    poster: String,

    #[serde(rename = "imdbID", default)]
    imdb_id: String,
}

/// Maps a provider string field to `None` when absent or `"N/A"`
fn optional(value: String) -> Option<String> {
    if value.is_empty() || value == "N/A" {
        None
    } else {
        Some(value)
    }
}

impl MovieFields {
    fn into_record(self) -> MovieRecord {
        // MovieRecord::new substitutes the title placeholder when empty
        let mut record = MovieRecord::new(self.title, self.imdb_id);
        if let Some(year) = optional(self.year) {
            record.year = year;
        }
        if let Some(director) = optional(self.director) {
            record.director = director;
        }
        record.plot = optional(self.plot);
        record.cast = optional(self.actors).unwrap_or_default();
        if let Some(rating) = optional(self.imdb_rating) {
            record.rating = rating;
        }
        record.poster_url = optional(self.poster);
        record
    }
}

impl From<ListingItem> for MovieSummary {
    fn from(item: ListingItem) -> Self {
        let mut summary = MovieSummary::new(item.title, item.imdb_id);
        if let Some(year) = optional(item.year) {
            summary.year = year;
        }
        summary.poster_url = optional(item.poster);
        summary
    }
}

impl ProviderEnvelope {
    /// Converts a parsed body into a lookup outcome
    ///
    /// `title` is the searched title, echoed into the not-found error;
    /// `page` is the page the request asked for.
    pub(crate) fn into_outcome(self, title: &str, page: u32) -> LookupResult<LookupOutcome> {
        if self.response.eq_ignore_ascii_case("false") {
            return Err(LookupError::NotFound(title.to_string()));
        }

        if let Some(items) = self.search {
            let total_results = self
                .total_results
                .as_deref()
                .and_then(|s| s.parse().ok())
                .unwrap_or(items.len() as u32);
            let summaries = items.into_iter().map(MovieSummary::from).collect();
            return Ok(LookupOutcome::Page(ResultPage::from_total_results(
                summaries,
                page,
                total_results,
            )));
        }

        Ok(LookupOutcome::Single(self.movie.into_record()))
    }
}
