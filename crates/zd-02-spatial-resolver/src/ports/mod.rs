//! Ports Layer
//!
//! Host spatial indices consumed by the resolver.

pub mod outbound;

pub use outbound::{MapProvider, MockSpatialIndex, MockWorld, SpatialIndex};
