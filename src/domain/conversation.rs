//! Assistant conversation types: context passed in, reply handed back, log entries.

use super::entities::RecommendationCard;
use super::intent::IntentKind;
use serde::{Deserialize, Serialize};

/// Answer language. Templates exist for each variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    /// Parse a language tag ("en", "es-MX", "Spanish"). Unknown tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let t = tag.trim().to_lowercase();
        if t.starts_with("es") || t == "spanish" || t == "español" {
            Language::Spanish
        } else {
            Language::English
        }
    }
}

/// What the assistant remembers between turns of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMemory {
    pub last_intent: Option<IntentKind>,
    pub last_query: Option<String>,
    /// Sticky once the user asks for family content.
    #[serde(default)]
    pub prefers_family: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantContext {
    pub language: Language,
    pub memory: ConversationMemory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantReply {
    pub answer: String,
    pub recommendations: Vec<RecommendationCard>,
    pub suggestions: Vec<String>,
    pub memory_update: Option<ConversationMemory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
    pub suggestions: Vec<String>,
}

/// One logged exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationEntry {
    /// Unix seconds.
    pub timestamp: i64,
    pub query: String,
    pub intent: IntentKind,
    pub answer: String,
    #[serde(default)]
    pub result_ids: Vec<String>,
}
