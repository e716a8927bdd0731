use async_trait::async_trait;
use thiserror::Error;

use koli_core::{AddressCandidate, GeoPoint};

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
}

/// A forward/reverse geocoding backend.
///
/// Errors from implementations never reach callers of the resolver; they are
/// absorbed into empty suggestion lists or coordinate labels.
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    /// Free-text search, candidates in provider rank order.
    async fn forward(&self, query: &str) -> Result<Vec<AddressCandidate>, GeocodeError>;

    /// Nearest known place for a coordinate, if the provider has one.
    async fn reverse(&self, point: GeoPoint) -> Result<Option<AddressCandidate>, GeocodeError>;
}
