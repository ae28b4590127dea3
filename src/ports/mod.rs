//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the front end into the application
//! - Outbound: Called by the application into infrastructure

pub mod inbound;
pub mod outbound;

pub use inbound::InputPort;
pub use outbound::{CatalogPort, ConversationLogPort};
