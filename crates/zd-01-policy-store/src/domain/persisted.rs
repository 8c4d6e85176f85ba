//! Persisted record format
//!
//! The store is written as a keyed sequence of `(id, record)` pairs. A
//! record may be `null` when the save was produced by an older format or an
//! interrupted write; such slots survive loading and are purged by
//! `PolicyStore::cleanup`.

use serde::{Deserialize, Serialize};
use shared_types::EntityId;

use super::record::PolicyRecord;

/// Section key under which the store is archived.
pub const STORE_SECTION_KEY: &str = "store";

/// One persisted slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedEntry {
    pub id: EntityId,
    pub record: Option<PolicyRecord>,
}

/// The whole persisted store, in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PersistedStore {
    #[serde(default)]
    pub entries: Vec<PersistedEntry>,
}

impl PersistedStore {
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
