//! Canned assistant copy. String templates only; nothing here is generated.

use crate::domain::{Greeting, IntentKind, Language, SearchResult};

fn count_noun(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("1 {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Answer text for a non-empty result list.
pub fn compose_answer(
    intent: IntentKind,
    query: &str,
    results: &[SearchResult],
    language: Language,
) -> String {
    let Some(top) = results.first() else {
        return fallback_answer(query, language);
    };
    let n = results.len();
    let title = top.item.display_name();
    let detail = top.item.subtitle();

    match language {
        Language::English => match intent {
            IntentKind::DiscoverEvents => format!(
                "I found {} you might enjoy. Top pick: {} ({}).",
                count_noun(n, "event", "events"),
                title,
                detail
            ),
            IntentKind::DiscoverMovies => format!(
                "Here {} worth watching. Top pick: {} ({}).",
                if n == 1 { "is 1 movie".to_string() } else { format!("are {n} movies") },
                title,
                detail
            ),
            IntentKind::FindOffers => format!(
                "I found {} for you. Best match: {} ({}).",
                count_noun(n, "deal", "deals"),
                title,
                detail
            ),
            IntentKind::FindVenues => format!(
                "Here {} matching your request. Top pick: {} in {}.",
                if n == 1 { "is 1 venue".to_string() } else { format!("are {n} venues") },
                title,
                detail
            ),
            IntentKind::GeneralSearch | IntentKind::Greeting => format!(
                "Here's what I found for \"{}\": {}, starting with {}.",
                query.trim(),
                count_noun(n, "result", "results"),
                title
            ),
        },
        Language::Spanish => match intent {
            IntentKind::DiscoverEvents => format!(
                "Encontré {} que te pueden gustar. Recomendado: {} ({}).",
                count_noun(n, "evento", "eventos"),
                title,
                detail
            ),
            IntentKind::DiscoverMovies => format!(
                "Aquí tienes {} para ver. Recomendada: {} ({}).",
                count_noun(n, "película", "películas"),
                title,
                detail
            ),
            IntentKind::FindOffers => format!(
                "Encontré {} para ti. La mejor: {} ({}).",
                count_noun(n, "oferta", "ofertas"),
                title,
                detail
            ),
            IntentKind::FindVenues => format!(
                "Aquí tienes {}. Recomendado: {} en {}.",
                count_noun(n, "recinto", "recintos"),
                title,
                detail
            ),
            IntentKind::GeneralSearch | IntentKind::Greeting => format!(
                "Esto es lo que encontré para \"{}\": {}, empezando por {}.",
                query.trim(),
                count_noun(n, "resultado", "resultados"),
                title
            ),
        },
    }
}

/// Answer used when nothing matched and curated picks are shown instead.
pub fn fallback_answer(query: &str, language: Language) -> String {
    match language {
        Language::English => format!(
            "I couldn't find an exact match for \"{}\", but here are some popular picks.",
            query.trim()
        ),
        Language::Spanish => format!(
            "No encontré nada exacto para \"{}\", pero aquí tienes algunas opciones populares.",
            query.trim()
        ),
    }
}

/// Answer used when retrieval itself failed.
pub fn failure_answer(language: Language) -> String {
    match language {
        Language::English => {
            "Sorry, I couldn't process that right now. Please try again in a moment.".to_string()
        }
        Language::Spanish => {
            "Lo siento, no pude procesar eso ahora. Inténtalo de nuevo en un momento.".to_string()
        }
    }
}

/// Reason shown on curated fallback cards.
pub fn curated_reason(language: Language) -> String {
    match language {
        Language::English => "Popular pick".to_string(),
        Language::Spanish => "Opción popular".to_string(),
    }
}

/// Follow-up prompts offered after an answer.
pub fn follow_ups(intent: IntentKind, language: Language) -> Vec<String> {
    let lines: [&str; 3] = match (language, intent) {
        (Language::English, IntentKind::DiscoverEvents) => [
            "Show me family events",
            "Any concerts this weekend?",
            "Are there deals on events?",
        ],
        (Language::English, IntentKind::DiscoverMovies) => [
            "Which movies are good for kids?",
            "Any cinema offers?",
            "What events are on instead?",
        ],
        (Language::English, IntentKind::FindOffers) => [
            "Show me family deals",
            "Any discounts on movies?",
            "What events are on this week?",
        ],
        (Language::English, IntentKind::FindVenues) => [
            "What's on at Harbour Hall?",
            "Show me outdoor events",
            "Any venue offers?",
        ],
        (Language::English, IntentKind::GeneralSearch | IntentKind::Greeting) => CURATED_SUGGESTIONS,
        (Language::Spanish, IntentKind::DiscoverEvents) => [
            "Muéstrame eventos para la familia",
            "¿Hay conciertos este fin de semana?",
            "¿Hay ofertas en eventos?",
        ],
        (Language::Spanish, IntentKind::DiscoverMovies) => [
            "¿Qué películas son buenas para niños?",
            "¿Hay ofertas de cine?",
            "¿Qué eventos hay?",
        ],
        (Language::Spanish, IntentKind::FindOffers) => [
            "Muéstrame ofertas familiares",
            "¿Descuentos en películas?",
            "¿Qué eventos hay esta semana?",
        ],
        (Language::Spanish, IntentKind::FindVenues) => [
            "¿Qué hay en Harbour Hall?",
            "Muéstrame eventos al aire libre",
            "¿Ofertas en recintos?",
        ],
        (Language::Spanish, IntentKind::GeneralSearch | IntentKind::Greeting) => [
            "¿Qué hay este fin de semana?",
            "Muéstrame películas para la familia",
            "¿Hay ofertas hoy?",
        ],
    };
    lines.iter().map(|s| s.to_string()).collect()
}

/// Fixed prompts offered with greetings and fallbacks.
pub const CURATED_SUGGESTIONS: [&str; 3] = [
    "What's on this weekend?",
    "Show me family-friendly movies",
    "Any deals today?",
];

pub fn greeting(language: Language) -> Greeting {
    let message = match language {
        Language::English => {
            "Hi! I'm your booking assistant. Ask me about events, movies, offers or venues."
        }
        Language::Spanish => {
            "¡Hola! Soy tu asistente de reservas. Pregúntame por eventos, películas, ofertas o recintos."
        }
    };
    Greeting {
        message: message.to_string(),
        suggestions: follow_ups(IntentKind::Greeting, language),
    }
}
