//! Relevance scoring. Additive points for case-insensitive substring hits.
//!
//! Reasons are appended in rule order; the first one is what cards show.

use super::entities::{CatalogItem, is_family_rating};
use super::intent::FAMILY_KEYWORDS;

pub const TITLE_POINTS: u32 = 10;
pub const FIELD_POINTS: u32 = 5;
pub const FAMILY_POINTS: u32 = 3;

pub const REASON_TITLE: &str = "Title/Name matches";
pub const REASON_DESCRIPTION: &str = "Description matches";
pub const REASON_LOCATION: &str = "Location matches";
pub const REASON_TAG: &str = "Tag matches";
pub const REASON_GENRE: &str = "Genre matches";
pub const REASON_CATEGORY: &str = "Category matches";
pub const REASON_FAMILY: &str = "Family friendly";
pub const REASON_FAMILY_RATING: &str = "Family rating";
pub const REASON_OFFER: &str = "Special offer";
pub const REASON_TYPE: &str = "Matches type";

const OFFER_KEYWORDS: &[&str] = &["offer", "deal", "discount"];

/// Score and reasons for one item against one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemScore {
    pub score: u32,
    pub why_matched: Vec<String>,
}

impl ItemScore {
    fn add(&mut self, points: u32, reason: &str) {
        self.score += points;
        self.why_matched.push(reason.to_string());
    }

    pub fn is_match(&self) -> bool {
        self.score > 0
    }
}

fn has(field: &str, q: &str) -> bool {
    field.to_lowercase().contains(q)
}

fn any_has(fields: &[String], q: &str) -> bool {
    fields.iter().any(|f| has(f, q))
}

/// Score `item` against `query`. An empty or whitespace-only query matches nothing.
pub fn score_item(item: &CatalogItem, query: &str) -> ItemScore {
    let q = query.trim().to_lowercase();
    let mut s = ItemScore::default();
    if q.is_empty() {
        return s;
    }

    if has(item.display_name(), &q) {
        s.add(TITLE_POINTS, REASON_TITLE);
    }

    let description = match item {
        CatalogItem::Event(e) => Some(e.description.as_str()),
        CatalogItem::Movie(m) => Some(m.description.as_str()),
        CatalogItem::Offer(o) => Some(o.description.as_str()),
        CatalogItem::Venue(_) => None,
    };
    if description.is_some_and(|d| has(d, &q)) {
        s.add(FIELD_POINTS, REASON_DESCRIPTION);
    }

    let location = match item {
        CatalogItem::Event(e) => Some(e.location.as_str()),
        CatalogItem::Venue(v) => Some(v.location.as_str()),
        CatalogItem::Movie(_) | CatalogItem::Offer(_) => None,
    };
    if location.is_some_and(|l| has(l, &q)) {
        s.add(FIELD_POINTS, REASON_LOCATION);
    }

    if let CatalogItem::Event(e) = item {
        if any_has(&e.tags, &q) {
            s.add(FIELD_POINTS, REASON_TAG);
        }
    }

    if let CatalogItem::Movie(m) = item {
        if any_has(&m.genre, &q) {
            s.add(FIELD_POINTS, REASON_GENRE);
        }
    }

    let category = match item {
        CatalogItem::Event(e) => Some(e.category.as_str()),
        CatalogItem::Offer(o) => o.category.as_deref(),
        CatalogItem::Movie(_) | CatalogItem::Venue(_) => None,
    };
    if category.is_some_and(|c| has(c, &q)) {
        s.add(FIELD_POINTS, REASON_CATEGORY);
    }

    if FAMILY_KEYWORDS.iter().any(|k| q.contains(k)) {
        match item {
            CatalogItem::Event(e) if e.family_friendly => s.add(FAMILY_POINTS, REASON_FAMILY),
            CatalogItem::Movie(m) if is_family_rating(&m.rating) => {
                s.add(FAMILY_POINTS, REASON_FAMILY_RATING)
            }
            _ => {}
        }
    }

    if OFFER_KEYWORDS.iter().any(|k| q.contains(k)) && matches!(item, CatalogItem::Offer(_)) {
        s.add(FIELD_POINTS, REASON_OFFER);
    }

    let type_name = item.kind().as_str();
    if q.contains(type_name) || q.contains(&format!("{type_name}s")) {
        s.add(FIELD_POINTS, REASON_TYPE);
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Event, Movie, Offer, Venue};

    fn event(title: &str, tags: &[&str], family: bool) -> CatalogItem {
        CatalogItem::Event(Event {
            id: title.to_lowercase().replace(' ', "-"),
            title: title.into(),
            description: "Live on stage".into(),
            category: "Music".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            location: "Riverside Arena".into(),
            date: "Fri 8 PM".into(),
            price: "From $30".into(),
            image: "/e.jpg".into(),
            family_friendly: family,
            status: None,
        })
    }

    fn movie(title: &str, rating: &str) -> CatalogItem {
        CatalogItem::Movie(Movie {
            id: "m".into(),
            title: title.into(),
            description: "A quiet drama".into(),
            genre: vec!["Drama".into()],
            duration: "2h".into(),
            rating: rating.into(),
            image: "/m.jpg".into(),
            backdrop: "/m-bg.jpg".into(),
            status: "now_showing".into(),
        })
    }

    #[test]
    fn test_title_match_is_first_reason() {
        let item = event("Jazz Night", &["Jazz"], false);
        let s = score_item(&item, "JAZZ");
        assert_eq!(s.why_matched[0], REASON_TITLE);
        assert!(s.why_matched.contains(&REASON_TAG.to_string()));
        assert_eq!(s.score, TITLE_POINTS + FIELD_POINTS);
    }

    #[test]
    fn test_empty_query_scores_zero() {
        let item = event("Jazz Night", &["Jazz"], true);
        assert_eq!(score_item(&item, ""), ItemScore::default());
        assert_eq!(score_item(&item, "   ").score, 0);
    }

    #[test]
    fn test_family_events_example() {
        let tagged = event("Puppet Parade", &["Family"], true);
        let plain = event("Late Set", &[], false);
        let a = score_item(&tagged, "family events");
        let b = score_item(&plain, "family events");
        assert!(a.score > b.score);
        assert!(a.why_matched.contains(&REASON_FAMILY.to_string()));
        assert!(a.why_matched.contains(&REASON_TYPE.to_string()));
        assert_eq!(b.why_matched, vec![REASON_TYPE.to_string()]);
    }

    #[test]
    fn test_family_rating_for_movies() {
        let s = score_item(&movie("Sky Rangers", "PG"), "kids");
        assert_eq!(s.score, FAMILY_POINTS);
        assert_eq!(s.why_matched, vec![REASON_FAMILY_RATING.to_string()]);
        assert_eq!(score_item(&movie("Night Shift", "R"), "kids").score, 0);
    }

    #[test]
    fn test_offer_keyword_bonus() {
        let offer = CatalogItem::Offer(Offer {
            id: "o1".into(),
            title: "Student Tuesdays".into(),
            description: "Half price tickets".into(),
            image: "/o.jpg".into(),
            discount: "50% OFF".into(),
            category: Some("Cinema".into()),
        });
        let s = score_item(&offer, "any deals");
        assert_eq!(s.why_matched, vec![REASON_OFFER.to_string()]);
        let s = score_item(&offer, "offers");
        // "offers" hits both the offer bonus and the plural type name.
        assert_eq!(s.score, FIELD_POINTS * 2);
        assert!(score_item(&offer, "cinema").why_matched.contains(&REASON_CATEGORY.to_string()));
    }

    #[test]
    fn test_venue_location() {
        let venue = CatalogItem::Venue(Venue {
            id: "v1".into(),
            name: "Harbour Hall".into(),
            location: "Dockside".into(),
            image: "/v.jpg".into(),
        });
        let s = score_item(&venue, "dockside");
        assert_eq!(s.why_matched, vec![REASON_LOCATION.to_string()]);
        assert_eq!(score_item(&venue, "harbour").score, TITLE_POINTS);
    }

    #[test]
    fn test_adding_matching_field_never_lowers_score() {
        let without = event("Night Market", &[], false);
        let with = event("Night Market", &["Street Food"], false);
        for q in ["food", "night", "market events", "street"] {
            assert!(score_item(&with, q).score >= score_item(&without, q).score, "{q}");
        }
    }
}
