//! Assistant service. Turns a free-text query into an answer with result cards.
//!
//! Coordinates intent detection, the search service, canned responses and
//! the optional conversation log.

use crate::adapters::persistence::{ExportFormat, export_entries};
use crate::domain::intent::mentions_family;
use crate::domain::{
    AssistantContext, AssistantReply, CatalogItem, ConversationEntry, ConversationMemory,
    DomainError, Greeting, Intent, IntentKind, ItemKind, Language, RecommendationCard, SearchFilters,
    SearchResult, detect_intent,
};
use crate::ports::ConversationLogPort;
use crate::usecases::responses;
use crate::usecases::search_service::SearchService;
use chrono::Utc;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Result of classifying and running one query.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub intent: Intent,
    pub filters: SearchFilters,
    pub results: Vec<SearchResult>,
}

/// Service behind the chat front end.
///
/// Flow per query:
/// 1. Detect intent and derive hard filters
/// 2. Search (skipped for greetings)
/// 3. Fill a per-intent template, or fall back to curated picks
/// 4. Append the exchange to the conversation log, if one is configured
pub struct AssistantService {
    search: Arc<SearchService>,
    log: Option<Arc<dyn ConversationLogPort>>,
}

impl AssistantService {
    /// Create a new assistant service.
    ///
    /// # Arguments
    /// * `search` - Search service over the catalog
    /// * `log` - Conversation log; `None` disables history
    pub fn new(search: Arc<SearchService>, log: Option<Arc<dyn ConversationLogPort>>) -> Self {
        Self { search, log }
    }

    /// Static greeting with three suggestions, in the session language.
    pub fn get_greetings(language: Language) -> Greeting {
        responses::greeting(language)
    }

    /// Detect intent, derive filters and search. Greetings return no results.
    pub async fn process_query(&self, query: &str) -> Result<QueryOutcome, DomainError> {
        self.process_query_with(query, &ConversationMemory::default())
            .await
    }

    /// Like `process_query`, but a remembered family preference also narrows
    /// event and movie results.
    async fn process_query_with(
        &self,
        query: &str,
        memory: &ConversationMemory,
    ) -> Result<QueryOutcome, DomainError> {
        let mut intent = detect_intent(query);
        let family = mentions_family(query);
        if family {
            intent.entities.family_friendly = Some(true);
        }

        // Only events and movies carry a family marker. Everywhere else the
        // preference is left to the scorer's family bonus.
        let target = intent.kind.target_kind();
        let family_filter = matches!(target, Some(ItemKind::Event | ItemKind::Movie))
            && (family || memory.prefers_family);

        let filters = SearchFilters {
            item_type: target.map(|k| k.as_str().to_string()),
            category: None,
            family_friendly: family_filter.then_some(true),
        };

        if intent.kind == IntentKind::Greeting {
            return Ok(QueryOutcome {
                intent,
                filters,
                results: Vec::new(),
            });
        }

        let results = self.search.search_assistant(query, Some(&filters)).await?;
        Ok(QueryOutcome {
            intent,
            filters,
            results,
        })
    }

    /// Answer a query. Never fails: retrieval errors become an apology.
    pub async fn get_ai_answer(&self, query: &str, context: &AssistantContext) -> AssistantReply {
        let language = context.language;

        let (reply, intent) = match self.process_query_with(query, &context.memory).await {
            Ok(outcome) => {
                let intent = outcome.intent.kind;
                let reply = self.compose(query, outcome, context).await;
                (reply, intent)
            }
            Err(e) => {
                warn!(query, error = %e, "assistant search failed");
                let reply = AssistantReply {
                    answer: responses::failure_answer(language),
                    recommendations: Vec::new(),
                    suggestions: Vec::new(),
                    memory_update: None,
                };
                (reply, detect_intent(query).kind)
            }
        };

        self.record(query, intent, &reply).await;
        reply
    }

    async fn compose(
        &self,
        query: &str,
        outcome: QueryOutcome,
        context: &AssistantContext,
    ) -> AssistantReply {
        let language = context.language;
        let kind = outcome.intent.kind;
        let memory_update = Some(ConversationMemory {
            last_intent: Some(kind),
            last_query: Some(query.to_string()),
            prefers_family: context.memory.prefers_family
                || outcome.intent.entities.family_friendly == Some(true),
        });

        if kind == IntentKind::Greeting {
            let greeting = responses::greeting(language);
            return AssistantReply {
                answer: greeting.message,
                recommendations: Vec::new(),
                suggestions: greeting.suggestions,
                memory_update,
            };
        }

        if outcome.results.is_empty() {
            return match self.curated_picks(language).await {
                Ok(recommendations) => AssistantReply {
                    answer: responses::fallback_answer(query, language),
                    recommendations,
                    suggestions: responses::follow_ups(IntentKind::GeneralSearch, language),
                    memory_update,
                },
                Err(e) => {
                    warn!(error = %e, "curated picks unavailable");
                    AssistantReply {
                        answer: responses::failure_answer(language),
                        recommendations: Vec::new(),
                        suggestions: Vec::new(),
                        memory_update: None,
                    }
                }
            };
        }

        info!(
            query,
            intent = %kind,
            results = outcome.results.len(),
            "assistant answered"
        );

        AssistantReply {
            answer: responses::compose_answer(kind, query, &outcome.results, language),
            recommendations: outcome.results.iter().map(RecommendationCard::from).collect(),
            suggestions: responses::follow_ups(kind, language),
            memory_update,
        }
    }

    /// First event, movie and offer of the catalog.
    async fn curated_picks(
        &self,
        language: Language,
    ) -> Result<Vec<RecommendationCard>, DomainError> {
        let catalog = self.search.fetch_catalog().await?;
        let reason = responses::curated_reason(language);
        let picks = [
            catalog.events.into_iter().next().map(CatalogItem::Event),
            catalog.movies.into_iter().next().map(CatalogItem::Movie),
            catalog.offers.into_iter().next().map(CatalogItem::Offer),
        ];
        Ok(picks
            .iter()
            .flatten()
            .map(|item| RecommendationCard::from_item(item, Some(reason.clone())))
            .collect())
    }

    async fn record(&self, query: &str, intent: IntentKind, reply: &AssistantReply) {
        let Some(log) = &self.log else {
            return;
        };
        let entry = ConversationEntry {
            timestamp: Utc::now().timestamp(),
            query: query.to_string(),
            intent,
            answer: reply.answer.clone(),
            result_ids: reply.recommendations.iter().map(|c| c.id.clone()).collect(),
        };
        if let Err(e) = log.append(entry).await {
            warn!(error = %e, "failed to append conversation log");
        }
    }

    /// Logged exchanges, oldest first. Empty when no log is configured.
    pub async fn history(&self) -> Result<Vec<ConversationEntry>, DomainError> {
        match &self.log {
            Some(log) => log.entries().await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn clear_history(&self) -> Result<(), DomainError> {
        match &self.log {
            Some(log) => log.clear().await,
            None => Ok(()),
        }
    }

    /// Export the log to `path` (CSV, or JSON Lines for `.jsonl`). Returns the entry count.
    pub async fn export_history(&self, path: &Path) -> Result<(usize, ExportFormat), DomainError> {
        let entries = self.history().await?;
        let format = export_entries(&entries, path).await?;
        Ok((entries.len(), format))
    }
}
