//! Domain Layer - Pure policy logic
//!
//! This layer contains:
//! - The per-entity policy record
//! - The in-memory store with lazy defaults and cleanup
//! - The persisted record format
//! - The toggle control contract offered to inspection panels
//!
//! RULES:
//! - No I/O operations (persistence goes through `ports::SessionArchive`)
//! - No interior mutability; the session owns the store

pub mod persisted;
pub mod record;
pub mod store;
pub mod toggle;

pub use persisted::{PersistedEntry, PersistedStore, STORE_SECTION_KEY};
pub use record::PolicyRecord;
pub use store::PolicyStore;
pub use toggle::{
    InspectionPanel, ToggleCommand, ToggleControl, DESCRIPTION, ICON_PATH, LABEL_HIDING,
    LABEL_SHOWING,
};
