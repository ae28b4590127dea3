//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ConversationEntry, DomainError, Event, Movie, Offer, Venue};

/// Catalog data source. Each list is fetched independently; no input.
#[async_trait::async_trait]
pub trait CatalogPort: Send + Sync {
    async fn fetch_events(&self) -> Result<Vec<Event>, DomainError>;

    async fn fetch_movies(&self) -> Result<Vec<Movie>, DomainError>;

    async fn fetch_offers(&self) -> Result<Vec<Offer>, DomainError>;

    async fn fetch_venues(&self) -> Result<Vec<Venue>, DomainError>;
}

/// Conversation log. Append-only with a capacity cap; oldest entries are evicted first.
#[async_trait::async_trait]
pub trait ConversationLogPort: Send + Sync {
    /// Append one exchange, evicting from the front if the cap is exceeded.
    async fn append(&self, entry: ConversationEntry) -> Result<(), DomainError>;

    /// All retained entries, oldest first.
    async fn entries(&self) -> Result<Vec<ConversationEntry>, DomainError>;

    /// Drop every entry.
    async fn clear(&self) -> Result<(), DomainError>;
}
