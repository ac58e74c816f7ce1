//! quizscore-core — Quiz model, scoring, and answer accumulation.
//!
//! This crate defines the quiz value types, the exact-match scorer, and the
//! file loading, validation, and reporting that the `quizscore` CLI builds on.

pub mod attempt;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod scorer;
pub mod traits;
