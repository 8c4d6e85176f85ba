//! Ports Layer
//!
//! Access to the host's method bodies.

pub mod outbound;

pub use outbound::{MethodRepository, MockMethodRepository};
