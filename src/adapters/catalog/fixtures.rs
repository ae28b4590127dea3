//! Built-in storefront catalog.

use crate::domain::{Catalog, Event, Movie, Offer, Venue};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    tags: &[&str],
    location: &str,
    date: &str,
    price: &str,
    family_friendly: bool,
    status: Option<&str>,
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        tags: strings(tags),
        location: location.to_string(),
        date: date.to_string(),
        price: price.to_string(),
        image: format!("/images/events/{id}.jpg"),
        family_friendly,
        status: status.map(str::to_string),
    }
}

fn movie(
    id: &str,
    title: &str,
    description: &str,
    genre: &[&str],
    duration: &str,
    rating: &str,
    status: &str,
) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        genre: strings(genre),
        duration: duration.to_string(),
        rating: rating.to_string(),
        image: format!("/images/movies/{id}.jpg"),
        backdrop: format!("/images/movies/{id}-backdrop.jpg"),
        status: status.to_string(),
    }
}

fn offer(id: &str, title: &str, description: &str, discount: &str, category: &str) -> Offer {
    Offer {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: format!("/images/offers/{id}.jpg"),
        discount: discount.to_string(),
        category: Some(category.to_string()),
    }
}

fn venue(id: &str, name: &str, location: &str) -> Venue {
    Venue {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        image: format!("/images/venues/{id}.jpg"),
    }
}

pub fn events() -> Vec<Event> {
    vec![
        event(
            "evt-001",
            "Desert Lights Music Festival",
            "Two nights of electronic and indie acts under the open sky.",
            "Music",
            &["Festival", "Electronic", "Outdoor"],
            "Al Qudra Lakes",
            "Fri, 13 Nov · 6:00 PM",
            "From $65",
            false,
            Some("selling_fast"),
        ),
        event(
            "evt-002",
            "Puppet Parade: The Lost Kite",
            "An interactive puppet show for young audiences and their grown-ups.",
            "Theatre",
            &["Family", "Kids", "Puppetry"],
            "Harbour Hall",
            "Sat, 14 Nov · 11:00 AM",
            "From $18",
            true,
            None,
        ),
        event(
            "evt-003",
            "Midnight Jazz Sessions",
            "Late-night improvised jazz with a rotating house band.",
            "Music",
            &["Jazz", "Live Music", "Nightlife"],
            "Blue Room, Old Town",
            "Thu, 19 Nov · 10:30 PM",
            "From $30",
            false,
            None,
        ),
        event(
            "evt-004",
            "Stand-Up Showcase",
            "Five rising comedians, one microphone, no filter.",
            "Comedy",
            &["Comedy", "Stand-Up"],
            "The Laugh Factory Downtown",
            "Fri, 20 Nov · 8:00 PM",
            "From $25",
            false,
            Some("few_left"),
        ),
        event(
            "evt-005",
            "Science Fair for Curious Minds",
            "Hands-on experiments, robot races and a planetarium dome for kids.",
            "Exhibition",
            &["Family", "Education", "Science"],
            "City Science Centre",
            "Sun, 22 Nov · 10:00 AM",
            "From $12",
            true,
            None,
        ),
        event(
            "evt-006",
            "Symphony Under the Stars",
            "The city orchestra performs film scores in the park.",
            "Classical",
            &["Orchestra", "Outdoor", "Family"],
            "Central Park Amphitheatre",
            "Sat, 28 Nov · 7:30 PM",
            "From $40",
            true,
            None,
        ),
        event(
            "evt-007",
            "Street Food Night Market",
            "Over sixty stalls, live DJs and late opening hours.",
            "Food & Drink",
            &["Food", "Market", "Nightlife"],
            "Marina Promenade",
            "Every Thu · 5:00 PM",
            "Free entry",
            true,
            None,
        ),
        event(
            "evt-008",
            "Championship Basketball Final",
            "The season decider between the two top seeds.",
            "Sports",
            &["Basketball", "Sports"],
            "National Arena",
            "Sun, 6 Dec · 4:00 PM",
            "From $55",
            false,
            Some("sold_out"),
        ),
    ]
}

pub fn movies() -> Vec<Movie> {
    vec![
        movie(
            "mov-001",
            "Sky Rangers",
            "A team of young pilots races to save their floating city.",
            &["Animation", "Adventure", "Family"],
            "1h 42m",
            "PG",
            "now_showing",
        ),
        movie(
            "mov-002",
            "The Last Signal",
            "A deep-space crew picks up a message that should not exist.",
            &["Sci-Fi", "Thriller"],
            "2h 11m",
            "PG-13",
            "now_showing",
        ),
        movie(
            "mov-003",
            "Harbour Lights",
            "Two strangers meet on the final ferry of the night.",
            &["Romance", "Drama"],
            "1h 58m",
            "PG-13",
            "now_showing",
        ),
        movie(
            "mov-004",
            "Night Shift",
            "A rookie detective works the graveyard shift in a city that never sleeps.",
            &["Crime", "Thriller"],
            "2h 04m",
            "R",
            "now_showing",
        ),
        movie(
            "mov-005",
            "Paws & Whiskers",
            "A runaway cat and a stubborn dog find their way home.",
            &["Comedy", "Family"],
            "1h 29m",
            "G",
            "coming_soon",
        ),
        movie(
            "mov-006",
            "Echoes of the Dunes",
            "A documentary following nomadic families across the desert.",
            &["Documentary"],
            "1h 35m",
            "PG",
            "coming_soon",
        ),
    ]
}

pub fn offers() -> Vec<Offer> {
    vec![
        offer(
            "off-001",
            "Student Tuesdays",
            "Half-price cinema tickets every Tuesday with a valid student ID.",
            "50% OFF",
            "Cinema",
        ),
        offer(
            "off-002",
            "Family Four-Pack",
            "Two adults and two kids for the price of three at selected shows.",
            "25% OFF",
            "Family",
        ),
        offer(
            "off-003",
            "Early Bird Festival Pass",
            "Book festival passes 30 days ahead and save.",
            "20% OFF",
            "Music",
        ),
        offer(
            "off-004",
            "Bank Card Cashback",
            "Pay with a partner card and get cashback on any booking.",
            "10% CASHBACK",
            "Payments",
        ),
    ]
}

pub fn venues() -> Vec<Venue> {
    vec![
        venue("ven-001", "Harbour Hall", "Waterfront District"),
        venue("ven-002", "National Arena", "Sports City"),
        venue("ven-003", "Blue Room", "Old Town"),
        venue("ven-004", "Central Park Amphitheatre", "Central Park"),
    ]
}

/// The full built-in catalog.
pub fn storefront_catalog() -> Catalog {
    Catalog {
        events: events(),
        movies: movies(),
        offers: offers(),
        venues: venues(),
    }
}
