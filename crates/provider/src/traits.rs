//! Metadata provider trait

use crate::client::ProviderClient;
use crate::error::LookupResult;
use async_trait::async_trait;
use reelview_core::{LookupOutcome, SearchQuery};

/// A movie metadata lookup service
///
/// The session drives any implementation of this trait; tests substitute
/// stubs for the real HTTP client.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Looks up a title with optional filters and a 1-based page number
    async fn lookup(&self, query: &SearchQuery, page: u32) -> LookupResult<LookupOutcome>;
}

#[async_trait]
impl MetadataProvider for ProviderClient {
    async fn lookup(&self, query: &SearchQuery, page: u32) -> LookupResult<LookupOutcome> {
        ProviderClient::lookup(self, query, page).await
    }
}

#[async_trait]
impl<T: MetadataProvider + ?Sized> MetadataProvider for std::sync::Arc<T> {
    async fn lookup(&self, query: &SearchQuery, page: u32) -> LookupResult<LookupOutcome> {
        (**self).lookup(query, page).await
    }
}
