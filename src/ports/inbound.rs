//! Inbound port. Front end (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the chat front end drives the assistant use cases.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive session until the user quits.
    async fn run(&self) -> Result<(), DomainError>;
}
