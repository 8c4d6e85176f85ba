//! # Zone-Deterioration Runtime
//!
//! Wires the subsystems into the host's lifecycle.
//!
//! ## Lifecycle
//!
//! | Host event | Entry point |
//! |------------|-------------|
//! | Process/module init | [`Extension::bootstrap`] |
//! | World loaded | [`SessionContext::on_world_loaded`] |
//! | Session saved | [`SessionContext::save`] |
//! | Entity destroyed | [`SessionContext::on_entity_destroyed`] |
//! | Notification emitted | [`Extension::on_message`] |
//! | Patched method runs | [`PredicateTable::invoke`] |
//! | Deterioration tick | [`deterioration_gate`] |

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod container;
pub mod error;
pub mod wiring;

pub use container::{Extension, ExtensionConfig, ExtensionConfigBuilder, SessionContext};
pub use error::{ConfigError, RuntimeError};
pub use wiring::{
    containing_zone_wants_message, default_targets, default_tracked_templates,
    deterioration_gate, stored_and_wants_message, PredicateFn, PredicateTable,
};
