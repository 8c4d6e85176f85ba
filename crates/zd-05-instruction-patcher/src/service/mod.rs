//! Service Layer
//!
//! Runs patch targets against the host.

pub mod engine;

pub use engine::PatchEngine;
