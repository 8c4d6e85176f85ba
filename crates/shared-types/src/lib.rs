//! # Shared Types Crate
//!
//! This crate contains the host-facing vocabulary used by every subsystem of
//! the extension.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: identifiers, cells, containers and the
//!   notification envelope are defined here and nowhere else.
//! - **Host Ownership**: every identifier is assigned by the host runtime;
//!   this crate never mints identifiers of its own.
//! - **Opaque Host Objects**: the host's object model is reduced to the few
//!   attributes the extension reads (identifier, label, storage flag).

pub mod entities;
pub mod errors;
pub mod notification;

pub use entities::*;
pub use errors::*;
pub use notification::*;
