//! Resolution algorithms

pub mod resolve;

pub use resolve::{resolve_container, resolve_storage, resolve_stored, resolve_thing, resolve_zone};
