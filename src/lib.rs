//! booking-assistant: rule-based storefront assistant with Hexagonal Architecture.
//!
//! Intent detection and scoring live in `domain`; catalog sources and the
//! conversation log sit behind `ports`.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
