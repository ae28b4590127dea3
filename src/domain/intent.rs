//! Intent detection. Keyword substring rules over the lower-cased query.
//!
//! Rules are checked in priority order and the first hit wins.

use super::entities::ItemKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentKind {
    DiscoverEvents,
    DiscoverMovies,
    FindOffers,
    FindVenues,
    GeneralSearch,
    Greeting,
}

impl IntentKind {
    /// Catalog type this intent narrows retrieval to, if any.
    pub fn target_kind(self) -> Option<ItemKind> {
        match self {
            IntentKind::DiscoverEvents => Some(ItemKind::Event),
            IntentKind::DiscoverMovies => Some(ItemKind::Movie),
            IntentKind::FindOffers => Some(ItemKind::Offer),
            IntentKind::FindVenues => Some(ItemKind::Venue),
            IntentKind::GeneralSearch | IntentKind::Greeting => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IntentKind::DiscoverEvents => "DISCOVER_EVENTS",
            IntentKind::DiscoverMovies => "DISCOVER_MOVIES",
            IntentKind::FindOffers => "FIND_OFFERS",
            IntentKind::FindVenues => "FIND_VENUES",
            IntentKind::GeneralSearch => "GENERAL_SEARCH",
            IntentKind::Greeting => "GREETING",
        }
    }
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentEntities {
    pub query: String,
    /// Not set by `detect_intent`; filled in when the query asks for family content.
    #[serde(default)]
    pub family_friendly: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(rename = "type")]
    pub kind: IntentKind,
    pub entities: IntentEntities,
}

const MOVIE_KEYWORDS: &[&str] = &["movie", "cinema", "film"];
const OFFER_KEYWORDS: &[&str] = &["offer", "deal", "discount"];
const VENUE_KEYWORDS: &[&str] = &["venue", "location", "place"];
const EVENT_KEYWORDS: &[&str] = &["event", "concert", "show", "do"];

/// Words that mark a request for family content. Shared with the scorer.
pub const FAMILY_KEYWORDS: &[&str] = &["family", "kids"];

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

fn is_greeting(q: &str) -> bool {
    q.contains("hello") || q.contains("hi ") || q == "hi"
}

/// Classify a free-text query. Never fails; empty input is `GeneralSearch`.
pub fn detect_intent(query: &str) -> Intent {
    let q = query.to_lowercase();

    let kind = if is_greeting(&q) {
        IntentKind::Greeting
    } else if contains_any(&q, MOVIE_KEYWORDS) {
        IntentKind::DiscoverMovies
    } else if contains_any(&q, OFFER_KEYWORDS) {
        IntentKind::FindOffers
    } else if contains_any(&q, VENUE_KEYWORDS) {
        IntentKind::FindVenues
    } else if contains_any(&q, EVENT_KEYWORDS) {
        IntentKind::DiscoverEvents
    } else {
        IntentKind::GeneralSearch
    };

    Intent {
        kind,
        entities: IntentEntities {
            query: query.to_string(),
            family_friendly: None,
        },
    }
}

/// True when the query mentions family or kids.
pub fn mentions_family(query: &str) -> bool {
    contains_any(&query.to_lowercase(), FAMILY_KEYWORDS)
}
