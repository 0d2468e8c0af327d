//! DeepCAL - Freight Decision Support Engine
//!
//! Ranks shipment alternatives (carriers and forwarders) against weighted
//! criteria. Weights come from pairwise judgments expressed as neutrosophic
//! triples; ranking uses TOPSIS closeness to the ideal solution.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
