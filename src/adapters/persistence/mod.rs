//! Persistence adapters. Conversation log storage and export.

pub mod conversation_json;
pub mod export;

pub use conversation_json::{DEFAULT_LOG_CAPACITY, JsonConversationLog};
pub use export::{ExportFormat, export_entries};
