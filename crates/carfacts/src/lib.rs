//! Domain library for the UK vehicle lookup service.
//!
//! The core is a family of pure lookups over embedded reference
//! datasets, all funneled through one normalize/alias/fuzzy matcher,
//! plus two composite scorers built on top of the resolved facts.

pub mod config;
pub mod datasets;
pub mod error;
pub mod lookup;
pub mod telemetry;
pub mod vehicle;
