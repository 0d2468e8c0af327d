//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DecisionRepository` - Persistence of ranking decisions

mod decision_repository;

pub use decision_repository::DecisionRepository;
