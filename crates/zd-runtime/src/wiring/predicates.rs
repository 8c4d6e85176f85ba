//! Predicates called from patched host methods
//!
//! Both return `true` for "show the notification".

use std::collections::HashMap;

use shared_types::ThingRef;
use tracing::trace;
use zd_01_policy_store::PolicyStore;
use zd_02_spatial_resolver::{resolve_stored, resolve_zone, MapProvider};
use zd_05_instruction_patcher::MethodRef;

/// Type the predicates are exposed under to the host.
pub const PREDICATES_TYPE: &str = "ZoneDeterioration.Predicates";

/// Signature shared by every host-callable predicate.
pub type PredicateFn = fn(&ThingRef, &dyn MapProvider, &mut PolicyStore) -> bool;

/// Method reference spliced in after plant message checks.
pub fn zone_predicate() -> MethodRef {
    MethodRef::new(PREDICATES_TYPE, "ContainingZoneWantsMessage")
}

/// Method reference replacing the rot check's storage test.
pub fn storage_predicate() -> MethodRef {
    MethodRef::new(PREDICATES_TYPE, "StoredAndWantsMessage")
}

/// Policy of the zone under `subject`; `true` when there is no zone.
pub fn containing_zone_wants_message(
    subject: &ThingRef,
    maps: &dyn MapProvider,
    store: &mut PolicyStore,
) -> bool {
    let map = subject.map.and_then(|id| maps.map(id));
    match resolve_zone(subject.cell, map) {
        Some(zone) => store.show_warning(zone.id),
        None => true,
    }
}

/// Stands in for "is in any storage": `false` unless `subject` sits in a
/// storage building or stockpile zone, otherwise the policy of that container.
pub fn stored_and_wants_message(
    subject: &ThingRef,
    maps: &dyn MapProvider,
    store: &mut PolicyStore,
) -> bool {
    match resolve_stored(subject, maps) {
        Some(container) => store.show_warning(container.id),
        None => false,
    }
}

/// Dispatch from a spliced method reference to its implementation.
#[derive(Clone)]
pub struct PredicateTable {
    entries: HashMap<MethodRef, PredicateFn>,
}

impl Default for PredicateTable {
    fn default() -> Self {
        Self::empty()
            .with(zone_predicate(), containing_zone_wants_message)
            .with(storage_predicate(), stored_and_wants_message)
    }
}

impl PredicateTable {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn with(mut self, method: MethodRef, predicate: PredicateFn) -> Self {
        self.entries.insert(method, predicate);
        self
    }

    pub fn contains(&self, method: &MethodRef) -> bool {
        self.entries.contains_key(method)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run the predicate registered for `method`; `None` if there is none.
    pub fn invoke(
        &self,
        method: &MethodRef,
        subject: &ThingRef,
        maps: &dyn MapProvider,
        store: &mut PolicyStore,
    ) -> Option<bool> {
        let predicate = self.entries.get(method)?;
        let result = predicate(subject, maps, store);
        trace!(method = %method, subject = %subject.id, result, "[zd] Predicate invoked");
        Some(result)
    }
}

impl std::fmt::Debug for PredicateTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
