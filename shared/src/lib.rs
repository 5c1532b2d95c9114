//! Shared types and models for the Ski Hut Rating app
//!
//! This crate contains the rating engine (score calculation, score band
//! classification, badge selection) and the value types exchanged between
//! the mobile frontend (via WASM) and the hosted backend.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
