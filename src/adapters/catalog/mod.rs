//! Catalog adapters. Implement CatalogPort.
//!
//! Built-in fixtures (with simulated latency) or a JSON file on disk.

pub mod fixture_catalog;
pub mod fixtures;
pub mod json_catalog;

pub use fixture_catalog::FixtureCatalog;
pub use json_catalog::JsonCatalog;
