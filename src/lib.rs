//! skipcart-rs: skip-hire selection engine.
//!
//! This crate provides a Rust-idiomatic API for the by-location skip
//! selection flow: catalog loading, cart bookkeeping, VAT-inclusive
//! pricing, and a backend-agnostic presentation seam.

pub mod api;
pub mod catalog;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod view;

pub use api::{SelectorEngine, SelectorEngineConfig};
pub use error::{SelectorError, SelectorResult};
