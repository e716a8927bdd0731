use std::sync::Arc;

use tracing::warn;

use koli_core::{AddressCandidate, GeoPoint};

use crate::provider::GeocodeProvider;

/// Address lookup front end over a geocoding provider.
///
/// Provider failures stay inside this type: a failed forward search becomes
/// an empty suggestion list, a failed reverse lookup becomes a coordinate
/// label. Callers never see a network error.
pub struct AddressResolver {
    provider: Arc<dyn GeocodeProvider>,
}

impl AddressResolver {
    pub fn new(provider: Arc<dyn GeocodeProvider>) -> Self {
        Self { provider }
    }

    /// Live suggestions for a partial query, in provider rank order.
    pub async fn suggest(&self, query: &str) -> Vec<AddressCandidate> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        match self.provider.forward(trimmed).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!("Forward geocoding failed for {:?}: {}", trimmed, e);
                Vec::new()
            }
        }
    }

    /// Explicit submit-search: auto-selects the provider's first-ranked
    /// candidate.
    pub async fn resolve_first(&self, query: &str) -> Option<AddressCandidate> {
        self.suggest(query).await.into_iter().next()
    }

    /// Best label for a coordinate. Falls back to the bare coordinates when
    /// the provider has nothing or is unreachable.
    pub async fn label_for(&self, point: GeoPoint) -> AddressCandidate {
        match self.provider.reverse(point).await {
            Ok(Some(candidate)) => candidate,
            Ok(None) => AddressCandidate::from_point(point, coordinate_label(point)),
            Err(e) => {
                warn!("Reverse geocoding failed: {}", e);
                AddressCandidate::from_point(point, coordinate_label(point))
            }
        }
    }
}

/// Five-decimal display form of a raw coordinate.
pub fn coordinate_label(point: GeoPoint) -> String {
    format!("{:.5}, {:.5}", point.latitude, point.longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::GeocodeError;
    use async_trait::async_trait;

    struct StaticProvider {
        candidates: Vec<AddressCandidate>,
    }

    #[async_trait]
    impl GeocodeProvider for StaticProvider {
        async fn forward(&self, _query: &str) -> Result<Vec<AddressCandidate>, GeocodeError> {
            Ok(self.candidates.clone())
        }

        async fn reverse(
            &self,
            _point: GeoPoint,
        ) -> Result<Option<AddressCandidate>, GeocodeError> {
            Ok(self.candidates.first().cloned())
        }
    }

    struct FailingProvider;

    fn network_error() -> GeocodeError {
        GeocodeError::InvalidUrl(url::Url::parse("::").unwrap_err())
    }

    #[async_trait]
    impl GeocodeProvider for FailingProvider {
        async fn forward(&self, _query: &str) -> Result<Vec<AddressCandidate>, GeocodeError> {
            Err(network_error())
        }

        async fn reverse(
            &self,
            _point: GeoPoint,
        ) -> Result<Option<AddressCandidate>, GeocodeError> {
            Err(network_error())
        }
    }

    fn candidates() -> Vec<AddressCandidate> {
        vec![
            AddressCandidate::new("osm/1", "Cocody, Abidjan", 16),
            AddressCandidate::new("osm/2", "Cocody Danga, Abidjan", 20),
        ]
    }

    #[tokio::test]
    async fn test_blank_query_suggests_nothing() {
        let resolver = AddressResolver::new(Arc::new(StaticProvider {
            candidates: candidates(),
        }));
        assert!(resolver.suggest("   ").await.is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_yields_empty_suggestions() {
        let resolver = AddressResolver::new(Arc::new(FailingProvider));
        assert!(resolver.suggest("cocody").await.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_first_takes_top_ranked_candidate() {
        let resolver = AddressResolver::new(Arc::new(StaticProvider {
            candidates: candidates(),
        }));
        let chosen = resolver.resolve_first("cocody").await.unwrap();
        assert_eq!(chosen.id, "osm/1");
    }

    #[tokio::test]
    async fn test_reverse_miss_falls_back_to_coordinate_label() {
        let resolver = AddressResolver::new(Arc::new(StaticProvider {
            candidates: Vec::new(),
        }));
        let point = GeoPoint::new(5.3536, -3.9864);
        let candidate = resolver.label_for(point).await;
        assert_eq!(candidate.label, "5.35360, -3.98640");
        assert_eq!(candidate.point, Some(point));
    }

    #[tokio::test]
    async fn test_reverse_failure_falls_back_to_coordinate_label() {
        let resolver = AddressResolver::new(Arc::new(FailingProvider));
        let point = GeoPoint::new(5.3536, -3.9864);
        let candidate = resolver.label_for(point).await;
        assert_eq!(candidate.label, "5.35360, -3.98640");
    }
}
