//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Conversation log error: {0}")]
    Log(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Input error: {0}")]
    Input(String),
}
