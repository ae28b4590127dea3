//! Implements CatalogPort from a JSON file.
//!
//! File shape: `{"events": [...], "movies": [...], "offers": [...], "venues": [...]}`.
//! Missing lists are empty. The file is read once on `load` and served from memory.

use crate::domain::{Catalog, DomainError, Event, Movie, Offer, Venue};
use crate::ports::CatalogPort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub struct JsonCatalog {
    path: PathBuf,
    catalog: Catalog,
}

impl JsonCatalog {
    /// Read and parse the catalog file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref().to_path_buf();
        let raw = fs::read_to_string(&path)
            .await
            .map_err(|e| DomainError::Catalog(format!("read {}: {}", path.display(), e)))?;
        let catalog: Catalog = serde_json::from_str(&raw)
            .map_err(|e| DomainError::Catalog(format!("parse {}: {}", path.display(), e)))?;
        info!(
            path = %path.display(),
            events = catalog.events.len(),
            movies = catalog.movies.len(),
            offers = catalog.offers.len(),
            venues = catalog.venues.len(),
            "loaded catalog file"
        );
        Ok(Self { path, catalog })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl CatalogPort for JsonCatalog {
    async fn fetch_events(&self) -> Result<Vec<Event>, DomainError> {
        Ok(self.catalog.events.clone())
    }

    async fn fetch_movies(&self) -> Result<Vec<Movie>, DomainError> {
        Ok(self.catalog.movies.clone())
    }

    async fn fetch_offers(&self) -> Result<Vec<Offer>, DomainError> {
        Ok(self.catalog.offers.clone())
    }

    async fn fetch_venues(&self) -> Result<Vec<Venue>, DomainError> {
        Ok(self.catalog.venues.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"movies": [{{"id": "m1", "title": "Sky Rangers", "description": "Pilots",
                "genre": ["Animation"], "duration": "1h 42m", "rating": "PG",
                "image": "/m1.jpg", "backdrop": "/m1-bg.jpg", "status": "now_showing"}}]}}"#
        )
        .unwrap();

        let catalog = JsonCatalog::load(file.path()).await.unwrap();
        let movies = catalog.fetch_movies().await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].rating, "PG");
        assert!(catalog.fetch_events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_catalog_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonCatalog::load(dir.path().join("nope.json"))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, DomainError::Catalog(_)));
    }

    #[tokio::test]
    async fn test_malformed_file_is_catalog_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert!(matches!(
            JsonCatalog::load(file.path()).await,
            Err(DomainError::Catalog(_))
        ));
    }
}
