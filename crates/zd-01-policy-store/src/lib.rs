//! # ZD-01 Policy Store
//!
//! Persisted mapping from host entity id to a notification policy record.
//!
//! **Subsystem ID:** 01
//! **Architecture:** Hexagonal (Domain + Ports)
//!
//! ## Purpose
//!
//! One [`PolicyRecord`] per storage container or zone the player has looked
//! at. The record carries a single flag, `show_warning`, which every other
//! subsystem consults before letting a deterioration or rot notification
//! through.
//!
//! ## Lifecycle
//!
//! - Created empty on world load, restored from the session archive.
//! - Records are created lazily on first query (default: show).
//! - Records are deleted when the host destroys the entity, or by the
//!   `cleanup` pass run once per load.
//! - Saved verbatim through the host's persistence facility.
//!
//! ## Module Structure
//!
//! ```text
//! zd-01-policy-store/
//! ├── domain/          # PolicyRecord, PolicyStore, persisted format, toggle control
//! └── ports/           # SessionArchive (host persistence facility)
//! ```
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: A never-queried id reads as `show_warning == true`.
//! - **INVARIANT-2**: At most one record per id.
//! - **INVARIANT-3**: `toggle` applied twice restores the original value.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{
    InspectionPanel, PersistedEntry, PersistedStore, PolicyRecord, PolicyStore, ToggleCommand,
    ToggleControl, DESCRIPTION, ICON_PATH, LABEL_HIDING, LABEL_SHOWING, STORE_SECTION_KEY,
};
pub use error::PolicyStoreError;
pub use ports::{MockSessionArchive, SessionArchive};
