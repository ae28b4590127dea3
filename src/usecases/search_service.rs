//! Retrieval: fetch all catalogs -> hard filters -> score -> rank -> truncate.
//!
//! - The four catalog lists are fetched concurrently; any failure fails the search
//! - Items keep catalog order (events, movies, offers, venues) before ranking
//! - Ranking is a stable sort, so equal scores keep that order

use crate::domain::{Catalog, CatalogItem, DomainError, SearchFilters, SearchResult, score_item};
use crate::ports::CatalogPort;
use std::sync::Arc;
use tracing::{debug, info};

/// Maximum number of results returned by a search.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Search service. Ranks catalog items against a free-text query.
pub struct SearchService {
    catalog: Arc<dyn CatalogPort>,
    max_results: usize,
}

impl SearchService {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self::with_max_results(catalog, DEFAULT_MAX_RESULTS)
    }

    pub fn with_max_results(catalog: Arc<dyn CatalogPort>, max_results: usize) -> Self {
        Self {
            catalog,
            max_results,
        }
    }

    /// Fetch the four catalog lists concurrently. Latency is that of the slowest list.
    pub async fn fetch_catalog(&self) -> Result<Catalog, DomainError> {
        let (events, movies, offers, venues) = tokio::try_join!(
            self.catalog.fetch_events(),
            self.catalog.fetch_movies(),
            self.catalog.fetch_offers(),
            self.catalog.fetch_venues(),
        )?;
        debug!(
            events = events.len(),
            movies = movies.len(),
            offers = offers.len(),
            venues = venues.len(),
            "catalog fetched"
        );
        Ok(Catalog {
            events,
            movies,
            offers,
            venues,
        })
    }

    /// Rank catalog items for `query`. Returns at most `max_results`, all with score > 0,
    /// sorted by score descending.
    pub async fn search_assistant(
        &self,
        query: &str,
        filters: Option<&SearchFilters>,
    ) -> Result<Vec<SearchResult>, DomainError> {
        let items = self.fetch_catalog().await?.into_items();
        let total = items.len();
        let results = rank(items, query, filters, self.max_results);

        info!(
            query,
            candidates = total,
            results = results.len(),
            top_score = results.first().map(|r| r.score).unwrap_or(0),
            "search complete"
        );

        Ok(results)
    }
}

/// Filter, score and rank `items`. Pure; `items` must already be in catalog order.
pub fn rank(
    items: Vec<CatalogItem>,
    query: &str,
    filters: Option<&SearchFilters>,
    limit: usize,
) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = items
        .into_iter()
        .filter(|item| filters.is_none_or(|f| f.admits(item)))
        .filter_map(|item| {
            let scored = score_item(&item, query);
            scored.is_match().then(|| SearchResult {
                item,
                score: scored.score,
                why_matched: scored.why_matched,
            })
        })
        .collect();

    // `sort_by` is stable: ties keep catalog order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::catalog::FixtureCatalog;
    use crate::domain::{Event, ItemKind, Movie, Offer, Venue};
    use std::time::{Duration, Instant};

    fn event(id: &str, title: &str, tags: &[&str], family: bool) -> Event {
        Event {
            id: id.into(),
            title: title.into(),
            description: "An evening out".into(),
            category: "Music".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            location: "Riverside".into(),
            date: "Fri".into(),
            price: "$20".into(),
            image: "/e.jpg".into(),
            family_friendly: family,
            status: None,
        }
    }

    fn movie(id: &str, title: &str, rating: &str) -> Movie {
        Movie {
            id: id.into(),
            title: title.into(),
            description: "A film".into(),
            genre: vec!["Drama".into()],
            duration: "2h".into(),
            rating: rating.into(),
            image: "/m.jpg".into(),
            backdrop: "/m-bg.jpg".into(),
            status: "now_showing".into(),
        }
    }

    fn service(catalog: Catalog) -> SearchService {
        SearchService::new(Arc::new(FixtureCatalog::from_catalog(catalog, 0)))
    }

    #[tokio::test]
    async fn test_family_events_ranks_tagged_first() {
        let svc = service(Catalog {
            events: vec![
                event("e1", "Late Set", &[], false),
                event("e2", "Puppet Parade", &["Family"], true),
            ],
            ..Catalog::default()
        });
        let results = svc.search_assistant("family events", None).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].item.id(), "e2");
        assert!(results[0].why_matched.iter().any(|r| r == "Family friendly"));
        assert!(results[0].why_matched.iter().any(|r| r == "Matches type"));
    }

    #[tokio::test]
    async fn test_ties_keep_catalog_order() {
        let svc = service(Catalog {
            events: vec![event("e1", "Gala Night", &[], false)],
            movies: vec![movie("m1", "Gala", "R")],
            offers: vec![Offer {
                id: "o1".into(),
                title: "Gala Deal".into(),
                description: "Cheaper".into(),
                image: "/o.jpg".into(),
                discount: "10%".into(),
                category: None,
            }],
            venues: vec![Venue {
                id: "v1".into(),
                name: "Gala Hall".into(),
                location: "North".into(),
                image: "/v.jpg".into(),
            }],
        });
        let results = svc.search_assistant("gala", None).await.unwrap();
        let ids: Vec<&str> = results.iter().map(|r| r.item.id()).collect();
        assert_eq!(ids, vec!["e1", "m1", "o1", "v1"]);
        assert!(results.iter().all(|r| r.score == 10));
    }

    #[tokio::test]
    async fn test_results_capped_sorted_positive() {
        let svc = SearchService::new(Arc::new(FixtureCatalog::with_delay(0)));
        for q in ["family", "music", "events", "a", "night"] {
            let results = svc.search_assistant(q, None).await.unwrap();
            assert!(results.len() <= DEFAULT_MAX_RESULTS, "{q}");
            assert!(results.iter().all(|r| r.score > 0), "{q}");
            assert!(results.windows(2).all(|w| w[0].score >= w[1].score), "{q}");
        }
    }

    #[tokio::test]
    async fn test_type_filter() {
        let svc = SearchService::new(Arc::new(FixtureCatalog::with_delay(0)));
        let filters = SearchFilters::of_kind(ItemKind::Movie);
        let results = svc.search_assistant("a", Some(&filters)).await.unwrap();
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.item.kind() == ItemKind::Movie));
    }

    #[tokio::test]
    async fn test_malformed_type_filter_yields_empty() {
        let svc = SearchService::new(Arc::new(FixtureCatalog::with_delay(0)));
        let filters = SearchFilters {
            item_type: Some("Movies!".into()),
            ..SearchFilters::default()
        };
        assert!(svc.search_assistant("a", Some(&filters)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_family_filter() {
        let svc = service(Catalog {
            events: vec![event("e1", "Drama Club", &[], false)],
            movies: vec![movie("m1", "Drama Kids", "PG"), movie("m2", "Drama Noir", "R")],
            ..Catalog::default()
        });
        let filters = SearchFilters {
            family_friendly: Some(true),
            ..SearchFilters::default()
        };
        let results = svc.search_assistant("drama", Some(&filters)).await.unwrap();
        let ids: Vec<&str> = results.iter().map(|r| r.item.id()).collect();
        assert_eq!(ids, vec!["m1"]);
    }

    #[tokio::test]
    async fn test_empty_query_matches_nothing() {
        let svc = SearchService::new(Arc::new(FixtureCatalog::with_delay(0)));
        assert!(svc.search_assistant("", None).await.unwrap().is_empty());
    }

    struct BrokenVenues;

    #[async_trait::async_trait]
    impl CatalogPort for BrokenVenues {
        async fn fetch_events(&self) -> Result<Vec<Event>, DomainError> {
            Ok(vec![event("e1", "Jazz", &[], false)])
        }
        async fn fetch_movies(&self) -> Result<Vec<Movie>, DomainError> {
            Ok(vec![])
        }
        async fn fetch_offers(&self) -> Result<Vec<Offer>, DomainError> {
            Ok(vec![])
        }
        async fn fetch_venues(&self) -> Result<Vec<Venue>, DomainError> {
            Err(DomainError::Catalog("venues unavailable".into()))
        }
    }

    #[tokio::test]
    async fn test_one_failed_catalog_fails_search() {
        let svc = SearchService::new(Arc::new(BrokenVenues));
        let err = svc.search_assistant("jazz", None).await.unwrap_err();
        assert!(matches!(err, DomainError::Catalog(_)));
    }

    #[tokio::test]
    async fn test_fetches_run_concurrently() {
        let svc = SearchService::new(Arc::new(FixtureCatalog::with_delay(100)));
        let started = Instant::now();
        svc.fetch_catalog().await.unwrap();
        // Sequential would take at least 400ms.
        assert!(started.elapsed() < Duration::from_millis(350));
    }

    #[test]
    fn test_rank_respects_limit() {
        let items: Vec<CatalogItem> = (0..8)
            .map(|n| CatalogItem::Event(event(&format!("e{n}"), "Show", &[], false)))
            .collect();
        let results = rank(items, "show", None, 3);
        let ids: Vec<&str> = results.iter().map(|r| r.item.id()).collect();
        assert_eq!(ids, vec!["e0", "e1", "e2"]);
    }
}
