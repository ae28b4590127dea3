//! Application use cases. Orchestrate domain logic via ports.

pub mod assistant_service;
pub mod responses;
pub mod search_service;

pub use assistant_service::{AssistantService, QueryOutcome};
pub use search_service::{DEFAULT_MAX_RESULTS, SearchService};
