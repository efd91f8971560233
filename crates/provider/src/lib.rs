//! Movie metadata provider client
//!
//! Issues one lookup request per call against an OMDb-style HTTP provider
//! and translates transport and provider failures into typed outcomes. The
//! client holds no shared state and persists nothing.

pub mod client;
pub mod error;
pub mod traits;

mod response;

pub use client::{ProviderClient, ProviderConfig};
pub use error::{LookupError, LookupResult};
pub use traits::MetadataProvider;
