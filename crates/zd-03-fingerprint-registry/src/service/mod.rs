//! Service Layer
//!
//! One-shot registry construction against the host renderer.

pub mod builder;

pub use builder::{BuildReport, RegistryBuilder};
