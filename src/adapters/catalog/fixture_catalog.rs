//! In-memory catalog adapter for the storefront fixtures.
//!
//! Each list is returned after its own simulated network delay.

use super::fixtures;
use crate::domain::{Catalog, DomainError, Event, Movie, Offer, Venue};
use crate::ports::CatalogPort;
use std::time::Duration;
use tracing::debug;

/// Fixture catalog. Serves a fixed `Catalog` snapshot.
///
/// The delay stands in for a real data source; use `with_delay(0)` in tests.
pub struct FixtureCatalog {
    catalog: Catalog,
    /// Simulated network delay in milliseconds, applied per list.
    delay_ms: u64,
}

impl FixtureCatalog {
    /// Built-in storefront catalog with default delay (150ms).
    pub fn new() -> Self {
        Self::with_delay(150)
    }

    /// Built-in storefront catalog with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self::from_catalog(fixtures::storefront_catalog(), delay_ms)
    }

    /// Serve an arbitrary catalog, e.g. a test fixture.
    pub fn from_catalog(catalog: Catalog, delay_ms: u64) -> Self {
        Self { catalog, delay_ms }
    }

    async fn simulate_latency(&self, list: &'static str) {
        if self.delay_ms > 0 {
            debug!(list, delay_ms = self.delay_ms, "[FIXTURE] simulating catalog fetch");
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CatalogPort for FixtureCatalog {
    async fn fetch_events(&self) -> Result<Vec<Event>, DomainError> {
        self.simulate_latency("events").await;
        Ok(self.catalog.events.clone())
    }

    async fn fetch_movies(&self) -> Result<Vec<Movie>, DomainError> {
        self.simulate_latency("movies").await;
        Ok(self.catalog.movies.clone())
    }

    async fn fetch_offers(&self) -> Result<Vec<Offer>, DomainError> {
        self.simulate_latency("offers").await;
        Ok(self.catalog.offers.clone())
    }

    async fn fetch_venues(&self) -> Result<Vec<Venue>, DomainError> {
        self.simulate_latency("venues").await;
        Ok(self.catalog.venues.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_catalog() {
        let adapter = FixtureCatalog::with_delay(0);
        let events = adapter.fetch_events().await.unwrap();
        let venues = adapter.fetch_venues().await.unwrap();

        assert_eq!(events.len(), 8);
        assert_eq!(venues.len(), 4);
        assert_eq!(events[0].id, "evt-001");
    }

    #[tokio::test]
    async fn test_custom_catalog() {
        let adapter = FixtureCatalog::from_catalog(Catalog::default(), 0);
        assert!(adapter.fetch_movies().await.unwrap().is_empty());
    }
}
