//! # Zone-Deterioration Test Suite
//!
//! Unified test crate for behaviour that spans subsystems.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Interceptor hot-path benchmarks
//! └── src/
//!     ├── fixtures.rs   # Shared host doubles
//!     └── integration/  # End-to-end scenarios
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p zd-tests
//! cargo bench -p zd-tests
//! ```

pub mod fixtures;
pub mod integration;
