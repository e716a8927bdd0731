use std::sync::Arc;

use tracing::warn;

use koli_core::Station;

use crate::classify::filter_interurban;
use crate::fallback::fallback_stations;
use crate::provider::StationProvider;

/// Destination-station catalogue for the order wizard.
///
/// Lists live interurban stations when the provider cooperates and the
/// curated fallback otherwise. Never returns an empty list.
pub struct StationDirectory {
    provider: Arc<dyn StationProvider>,
}

impl StationDirectory {
    pub fn new(provider: Arc<dyn StationProvider>) -> Self {
        Self { provider }
    }

    pub async fn list(&self) -> Vec<Station> {
        match self.provider.fetch_transit_points().await {
            Ok(points) => {
                let stations = filter_interurban(points);
                if stations.is_empty() {
                    warn!("No interurban stations after filtering, serving fallback list");
                    fallback_stations()
                } else {
                    stations
                }
            }
            Err(e) => {
                warn!("Station lookup failed ({}), serving fallback list", e);
                fallback_stations()
            }
        }
    }
}
