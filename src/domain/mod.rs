//! Core domain layer. No external I/O dependencies.
//!
//! Entities, intent rules and scoring live here. Dependencies flow inward.

pub mod conversation;
pub mod entities;
pub mod errors;
pub mod intent;
pub mod scoring;

pub use conversation::{AssistantContext, AssistantReply, ConversationEntry, ConversationMemory, Greeting, Language};
pub use entities::{
    Catalog, CatalogItem, Event, ItemKind, Movie, Offer, RecommendationCard, SearchFilters,
    SearchResult, Venue,
};
pub use errors::DomainError;
pub use intent::{Intent, IntentEntities, IntentKind, detect_intent};
pub use scoring::{ItemScore, score_item};
