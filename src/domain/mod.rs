//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `ranking` - Neutrosophic weighting and TOPSIS ranking
//! - `freight` - Standard shipment criteria and forwarder quotes

pub mod foundation;
pub mod freight;
pub mod ranking;
