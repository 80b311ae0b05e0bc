//! # Simulated network latency
//!
//! The search page shows a "Searching..." state for about a second before
//! results appear, standing in for a network round trip. The delay is an
//! injected port rather than a hardcoded sleep, so tests swap in [`NoLatency`]
//! and run deterministically.

use std::time::Duration;

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::models::{Ride, RideFilter};
use crate::Marketplace;

/// An awaitable delay inserted before data access.
pub trait Latency {
    fn wait(&self) -> impl std::future::Future<Output = ()>;
}

/// Fixed artificial delay. Sleeps on a timer appropriate to the platform.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedLatency {
    /// The fixed delay shown on the search page.
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Latency for SimulatedLatency {
    async fn wait(&self) {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(self.delay).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(self.delay).await;
    }
}

/// Zero delay, for tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLatency;

impl Latency for NoLatency {
    async fn wait(&self) {}
}

/// A marketplace search behind a latency port.
#[derive(Clone, Debug)]
pub struct SearchService<S: KeyValueStore, L: Latency> {
    market: Marketplace<S>,
    latency: L,
}

impl<S: KeyValueStore, L: Latency> SearchService<S, L> {
    pub fn new(market: Marketplace<S>, latency: L) -> Self {
        Self { market, latency }
    }

    /// Wait out the simulated round trip, then run the search.
    pub async fn search(&self, filter: &RideFilter) -> Result<Vec<Ride>, StoreError> {
        self.latency.wait().await;
        self.market.search(filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fallback_rides;
    use crate::MemoryStore;

    #[tokio::test]
    async fn search_service_is_deterministic_with_no_latency() {
        let service = SearchService::new(Marketplace::new(MemoryStore::new()), NoLatency);
        let results = service.search(&RideFilter::default()).await.unwrap();
        assert_eq!(results, fallback_rides());
    }
}
