use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::debug;

use koli_core::AddressCandidate;

use crate::resolver::AddressResolver;

/// Outcome of one submitted search query.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The query survived the quiet period and its results are now visible.
    Applied(Vec<AddressCandidate>),

    /// A newer query arrived; this one changed nothing.
    Superseded,
}

/// Debounced search pipeline with latest-query-wins semantics.
///
/// Every submission takes a fresh generation number. A submission only
/// applies its results if it is still the newest generation after the quiet
/// period AND after the provider answers, so a slow response for an old
/// query can never overwrite a newer one. Timer cancellation alone is not
/// trusted.
#[derive(Clone)]
pub struct SearchCoordinator {
    resolver: Arc<AddressResolver>,
    generation: Arc<AtomicU64>,
    visible: Arc<Mutex<Vec<AddressCandidate>>>,
    debounce: Duration,
}

impl SearchCoordinator {
    pub fn new(resolver: Arc<AddressResolver>, debounce: Duration) -> Self {
        Self {
            resolver,
            generation: Arc::new(AtomicU64::new(0)),
            visible: Arc::new(Mutex::new(Vec::new())),
            debounce,
        }
    }

    /// Results of the newest applied query.
    pub async fn visible(&self) -> Vec<AddressCandidate> {
        self.visible.lock().await.clone()
    }

    /// Submit a query. Waits out the quiet period, searches, and applies the
    /// results unless a newer submission has taken over meanwhile.
    pub async fn submit(&self, query: &str) -> SearchOutcome {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.debounce).await;
        if self.generation.load(Ordering::SeqCst) != my_generation {
            debug!("Search {:?} superseded during quiet period", query);
            return SearchOutcome::Superseded;
        }

        let candidates = self.resolver.suggest(query).await;

        // Re-check under the lock: the provider may have answered after an
        // even newer query started.
        let mut visible = self.visible.lock().await;
        if self.generation.load(Ordering::SeqCst) != my_generation {
            debug!("Search {:?} superseded while in flight", query);
            return SearchOutcome::Superseded;
        }
        *visible = candidates.clone();
        SearchOutcome::Applied(candidates)
    }

    /// Invalidate queued and in-flight queries and clear visible results.
    pub async fn clear(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.visible.lock().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{GeocodeError, GeocodeProvider};
    use async_trait::async_trait;
    use koli_core::GeoPoint;
    use std::collections::HashMap;

    /// Provider whose answers can be delayed per query.
    struct DelayedProvider {
        delays: HashMap<String, Duration>,
    }

    impl DelayedProvider {
        fn instant() -> Self {
            Self {
                delays: HashMap::new(),
            }
        }

        fn with_delay(query: &str, delay: Duration) -> Self {
            let mut delays = HashMap::new();
            delays.insert(query.to_string(), delay);
            Self { delays }
        }
    }

    #[async_trait]
    impl GeocodeProvider for DelayedProvider {
        async fn forward(&self, query: &str) -> Result<Vec<AddressCandidate>, GeocodeError> {
            if let Some(delay) = self.delays.get(query) {
                tokio::time::sleep(*delay).await;
            }
            Ok(vec![AddressCandidate::new(
                format!("q/{query}"),
                format!("Results for {query}"),
                0,
            )])
        }

        async fn reverse(
            &self,
            _point: GeoPoint,
        ) -> Result<Option<AddressCandidate>, GeocodeError> {
            Ok(None)
        }
    }

    fn coordinator(provider: DelayedProvider) -> SearchCoordinator {
        SearchCoordinator::new(
            Arc::new(AddressResolver::new(Arc::new(provider))),
            Duration::from_millis(400),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_query_applies_after_quiet_period() {
        let coordinator = coordinator(DelayedProvider::instant());
        let outcome = coordinator.submit("cocody").await;

        match outcome {
            SearchOutcome::Applied(candidates) => {
                assert_eq!(candidates.len(), 1);
                assert_eq!(candidates[0].id, "q/cocody");
            }
            SearchOutcome::Superseded => panic!("query should have been applied"),
        }
        assert_eq!(coordinator.visible().await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_query_supersedes_one_still_waiting() {
        let coordinator = coordinator(DelayedProvider::instant());

        let first = coordinator.clone();
        let first_handle = tokio::spawn(async move { first.submit("A").await });

        // Second keystroke lands inside the first query's quiet period
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = coordinator.clone();
        let second_handle = tokio::spawn(async move { second.submit("AB").await });

        assert_eq!(first_handle.await.unwrap(), SearchOutcome::Superseded);
        let applied = second_handle.await.unwrap();
        assert_eq!(
            applied,
            SearchOutcome::Applied(vec![AddressCandidate::new("q/AB", "Results for AB", 0)])
        );

        let visible = coordinator.visible().await;
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "q/AB");
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_response_for_old_query_never_lands() {
        // "A" passes its quiet period but its provider call takes a second
        let coordinator =
            coordinator(DelayedProvider::with_delay("A", Duration::from_secs(1)));

        let first = coordinator.clone();
        let first_handle = tokio::spawn(async move { first.submit("A").await });

        // "AB" starts while "A" is already in flight and finishes first
        tokio::time::sleep(Duration::from_millis(500)).await;
        let second = coordinator.clone();
        let second_handle = tokio::spawn(async move { second.submit("AB").await });

        assert_eq!(
            second_handle.await.unwrap(),
            SearchOutcome::Applied(vec![AddressCandidate::new("q/AB", "Results for AB", 0)])
        );
        assert_eq!(first_handle.await.unwrap(), SearchOutcome::Superseded);

        let visible = coordinator.visible().await;
        assert_eq!(visible[0].id, "q/AB");
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_invalidates_pending_query() {
        let coordinator = coordinator(DelayedProvider::instant());

        let pending = coordinator.clone();
        let handle = tokio::spawn(async move { pending.submit("A").await });

        tokio::time::sleep(Duration::from_millis(100)).await;
        coordinator.clear().await;

        assert_eq!(handle.await.unwrap(), SearchOutcome::Superseded);
        assert!(coordinator.visible().await.is_empty());
    }
}
