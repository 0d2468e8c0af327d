//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory decision storage
//! - `http` - REST API (axum)

pub mod http;
pub mod memory;

pub use memory::InMemoryDecisionRepository;
