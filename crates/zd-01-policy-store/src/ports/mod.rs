//! Ports Layer
//!
//! Driven ports the Policy Store depends on.

pub mod outbound;

pub use outbound::{MockSessionArchive, SessionArchive};
