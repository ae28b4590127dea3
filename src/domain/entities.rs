//! Domain entities. Pure data structures for the storefront catalog and assistant.
//!
//! No IO types here. Catalog adapters deserialize straight into these.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A bookable event (concert, festival, show).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub location: String,
    /// Display string, e.g. "Sat, 14 Nov · 8:00 PM".
    pub date: String,
    /// Display string, e.g. "From $45".
    pub price: String,
    pub image: String,
    #[serde(default)]
    pub family_friendly: bool,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub genre: Vec<String>,
    pub duration: String,
    /// Classification such as "G", "PG", "PG-13", "R".
    pub rating: String,
    pub image: String,
    pub backdrop: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Display string, e.g. "20% OFF".
    pub discount: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub location: String,
    pub image: String,
}

/// One displayable catalog record. Discriminated by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CatalogItem {
    Event(Event),
    Movie(Movie),
    Offer(Offer),
    Venue(Venue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Event,
    Movie,
    Offer,
    Venue,
}

impl ItemKind {
    /// Lowercase singular type name, as used in the `type` discriminant.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Event => "event",
            ItemKind::Movie => "movie",
            ItemKind::Offer => "offer",
            ItemKind::Venue => "venue",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Movie ratings that count as family friendly.
pub const FAMILY_RATINGS: &[&str] = &["G", "PG"];

impl CatalogItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            CatalogItem::Event(_) => ItemKind::Event,
            CatalogItem::Movie(_) => ItemKind::Movie,
            CatalogItem::Offer(_) => ItemKind::Offer,
            CatalogItem::Venue(_) => ItemKind::Venue,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            CatalogItem::Event(e) => &e.id,
            CatalogItem::Movie(m) => &m.id,
            CatalogItem::Offer(o) => &o.id,
            CatalogItem::Venue(v) => &v.id,
        }
    }

    /// Title for events, movies and offers; name for venues.
    pub fn display_name(&self) -> &str {
        match self {
            CatalogItem::Event(e) => &e.title,
            CatalogItem::Movie(m) => &m.title,
            CatalogItem::Offer(o) => &o.title,
            CatalogItem::Venue(v) => &v.name,
        }
    }

    pub fn image(&self) -> &str {
        match self {
            CatalogItem::Event(e) => &e.image,
            CatalogItem::Movie(m) => &m.image,
            CatalogItem::Offer(o) => &o.image,
            CatalogItem::Venue(v) => &v.image,
        }
    }

    /// Short secondary line for result cards.
    pub fn subtitle(&self) -> String {
        match self {
            CatalogItem::Event(e) => format!("{} · {}", e.date, e.location),
            CatalogItem::Movie(m) => format!("{} · {}", m.rating, m.duration),
            CatalogItem::Offer(o) => o.discount.clone(),
            CatalogItem::Venue(v) => v.location.clone(),
        }
    }

    /// Event flagged family friendly, or movie rated G/PG. Offers and venues never are.
    pub fn is_family_friendly(&self) -> bool {
        match self {
            CatalogItem::Event(e) => e.family_friendly,
            CatalogItem::Movie(m) => is_family_rating(&m.rating),
            CatalogItem::Offer(_) | CatalogItem::Venue(_) => false,
        }
    }
}

pub fn is_family_rating(rating: &str) -> bool {
    FAMILY_RATINGS
        .iter()
        .any(|r| r.eq_ignore_ascii_case(rating.trim()))
}

/// Full catalog snapshot: the four provider lists in their fixed order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub venues: Vec<Venue>,
}

impl Catalog {
    /// Flatten into one list: events, movies, offers, venues. Per-list order is kept.
    pub fn into_items(self) -> Vec<CatalogItem> {
        let mut items = Vec::with_capacity(
            self.events.len() + self.movies.len() + self.offers.len() + self.venues.len(),
        );
        items.extend(self.events.into_iter().map(CatalogItem::Event));
        items.extend(self.movies.into_iter().map(CatalogItem::Movie));
        items.extend(self.offers.into_iter().map(CatalogItem::Offer));
        items.extend(self.venues.into_iter().map(CatalogItem::Venue));
        items
    }
}

/// Optional hard pre-filters applied before scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Exact `type` discriminant ("event", "movie", ...). Unknown values match nothing.
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    /// Carried for callers; not applied as a hard filter.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub family_friendly: Option<bool>,
}

impl SearchFilters {
    pub fn of_kind(kind: ItemKind) -> Self {
        Self {
            item_type: Some(kind.as_str().to_string()),
            ..Self::default()
        }
    }

    /// True when `item` survives every hard filter that is set.
    pub fn admits(&self, item: &CatalogItem) -> bool {
        if let Some(t) = &self.item_type {
            if t != item.kind().as_str() {
                return false;
            }
        }
        if self.family_friendly == Some(true) && !item.is_family_friendly() {
            return false;
        }
        true
    }
}

/// One ranked hit. Built fresh per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub item: CatalogItem,
    pub score: u32,
    pub why_matched: Vec<String>,
}

impl SearchResult {
    /// First reason; the one cards display.
    pub fn primary_reason(&self) -> Option<&str> {
        self.why_matched.first().map(String::as_str)
    }
}

/// Display card for one recommended item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationCard {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub reason: Option<String>,
}

impl RecommendationCard {
    pub fn from_item(item: &CatalogItem, reason: Option<String>) -> Self {
        Self {
            id: item.id().to_string(),
            kind: item.kind(),
            title: item.display_name().to_string(),
            subtitle: item.subtitle(),
            image: item.image().to_string(),
            reason,
        }
    }
}

impl From<&SearchResult> for RecommendationCard {
    fn from(result: &SearchResult) -> Self {
        Self::from_item(&result.item, result.primary_reason().map(str::to_string))
    }
}
