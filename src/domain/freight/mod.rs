//! Freight Module - standard shipment criteria and forwarder quotes.
//!
//! Ready-made criteria and importance judgments for the common case of
//! comparing forwarder quotes on cost, transit time, reliability and risk.

mod presets;
mod quote;

pub use presets::{standard_criteria, standard_judgments, COST, RELIABILITY, RISK, TRANSIT_TIME};
pub use quote::ShipmentQuote;
