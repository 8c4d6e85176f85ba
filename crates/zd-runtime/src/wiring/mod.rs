//! # Host Wiring
//!
//! The predicates patched host methods call into, the deterioration gate,
//! and the stock patch targets and tracked templates.

pub mod gate;
pub mod predicates;
pub mod targets;

pub use gate::deterioration_gate;
pub use predicates::{
    containing_zone_wants_message, storage_predicate, stored_and_wants_message, zone_predicate,
    PredicateFn, PredicateTable,
};
pub use targets::{default_targets, default_tracked_templates};
