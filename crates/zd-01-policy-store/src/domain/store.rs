//! Policy store
//!
//! Session-owned mapping from host entity id to [`PolicyRecord`].

use std::collections::HashMap;

use shared_types::EntityId;
use tracing::{debug, info};

use super::persisted::{PersistedEntry, PersistedStore, STORE_SECTION_KEY};
use super::record::PolicyRecord;
use crate::error::PolicyStoreError;
use crate::ports::SessionArchive;

/// Per-session policy store.
///
/// Slots hold `Option<PolicyRecord>` so that null records restored from an
/// old save can be told apart from real ones until `cleanup` runs. Readers
/// never see a null: `get` replaces it with a default record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyStore {
    slots: HashMap<EntityId, Option<PolicyRecord>>,
}

impl PolicyStore {
    /// Create an empty store (fresh world).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for `id`, created with the default policy on first access.
    pub fn get(&mut self, id: EntityId) -> PolicyRecord {
        *self.record_mut(id)
    }

    /// Shorthand for `get(id).show_warning`.
    pub fn show_warning(&mut self, id: EntityId) -> bool {
        self.get(id).show_warning
    }

    /// Flip `show_warning` for `id` and return the new value.
    pub fn toggle(&mut self, id: EntityId) -> bool {
        let record = self.record_mut(id);
        record.show_warning = !record.show_warning;
        debug!(
            "[zd-01] Toggled {} -> show_warning={}",
            id, record.show_warning
        );
        record.show_warning
    }

    /// Restore the default policy for `id`.
    pub fn reset(&mut self, id: EntityId) {
        self.record_mut(id).reset();
    }

    /// Remove the record for `id`; no-op when absent.
    pub fn delete(&mut self, id: EntityId) {
        if self.slots.remove(&id).is_some() {
            debug!("[zd-01] Deleted policy record for {}", id);
        }
    }

    /// Purge null slots and records whose `should_clean()` is true.
    pub fn cleanup(&mut self) {
        let before = self.slots.len();
        self.slots
            .retain(|_, slot| matches!(slot, Some(record) if !record.should_clean()));
        let removed = before - self.slots.len();
        info!(
            removed,
            remaining = self.slots.len(),
            "[zd-01] Policy store cleanup finished"
        );
    }

    /// Whether a slot (possibly null) exists for `id`.
    pub fn contains(&self, id: EntityId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Number of slots, nulls included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Stored ids in ascending order.
    pub fn ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.slots.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Insert a null slot, as an interrupted save would leave behind.
    pub fn insert_null(&mut self, id: EntityId) {
        self.slots.insert(id, None);
    }

    fn record_mut(&mut self, id: EntityId) -> &mut PolicyRecord {
        let slot = self.slots.entry(id).or_insert(None);
        slot.get_or_insert_with(PolicyRecord::default)
    }

    // =========================================================================
    // PERSISTENCE
    // =========================================================================

    /// Snapshot in the persisted format, ascending by id.
    pub fn to_persisted(&self) -> PersistedStore {
        let mut entries: Vec<PersistedEntry> = self
            .slots
            .iter()
            .map(|(id, record)| PersistedEntry {
                id: *id,
                record: *record,
            })
            .collect();
        entries.sort_by_key(|entry| entry.id);
        PersistedStore { entries }
    }

    /// Rebuild a store from its persisted form. A repeated id keeps the last
    /// entry.
    pub fn from_persisted(persisted: PersistedStore) -> Self {
        let slots = persisted
            .entries
            .into_iter()
            .map(|entry| (entry.id, entry.record))
            .collect();
        Self { slots }
    }

    /// Write the store into the session archive.
    pub fn save(&self, archive: &mut dyn SessionArchive) -> Result<(), PolicyStoreError> {
        let bytes = self.to_persisted().to_bytes()?;
        archive.write_section(STORE_SECTION_KEY, bytes)?;
        debug!("[zd-01] Saved {} policy records", self.slots.len());
        Ok(())
    }

    /// Restore a store from the session archive. A missing section yields an
    /// empty store.
    pub fn load(archive: &dyn SessionArchive) -> Result<Self, PolicyStoreError> {
        let store = match archive.read_section(STORE_SECTION_KEY)? {
            Some(bytes) => Self::from_persisted(PersistedStore::from_bytes(&bytes)?),
            None => Self::new(),
        };
        debug!("[zd-01] Loaded {} policy records", store.slots.len());
        Ok(store)
    }
}
