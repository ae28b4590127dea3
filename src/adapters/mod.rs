//! Infrastructure adapters. Implement ports.
//!
//! Catalog sources, conversation log storage, terminal UI. Map errors to DomainError.

pub mod catalog;
pub mod persistence;
pub mod ui;
