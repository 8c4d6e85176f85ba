//! Domain Layer - Intercept decisions
//!
//! RULES:
//! - No I/O operations
//! - Decisions are values; logging and counting happen in the service

pub mod decision;

pub use decision::{DecisionReason, InterceptOutcome};
