use async_trait::async_trait;
use thiserror::Error;

use koli_core::{GeoPoint, StationCategory};

#[derive(Debug, Error)]
pub enum StationError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
}

/// An unclassified transit point as the map data provider reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitPoint {
    pub id: String,
    pub name: Option<String>,
    pub operator: Option<String>,
    pub point: Option<GeoPoint>,
    pub category: StationCategory,
}

/// Backend serving raw transit infrastructure for the service country.
#[async_trait]
pub trait StationProvider: Send + Sync {
    async fn fetch_transit_points(&self) -> Result<Vec<TransitPoint>, StationError>;
}
