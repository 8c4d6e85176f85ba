//! # Session Context
//!
//! Per-world state. Created when the host loads or starts a world and
//! dropped when the world unloads; passed by reference to every hook that
//! needs policy.

use shared_types::EntityId;
use tracing::{debug, info, warn};
use zd_01_policy_store::{
    InspectionPanel, PolicyStore, PolicyStoreError, SessionArchive, ToggleCommand,
    ToggleControl,
};

use crate::error::RuntimeError;

/// State owned by one loaded world.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    store: PolicyStore,
}

impl SessionContext {
    /// Context for a freshly generated world.
    pub fn new_world() -> Self {
        Self::default()
    }

    /// Restore the context from a saved world and purge stale records.
    ///
    /// A section that no longer decodes is discarded and the world starts
    /// with default policy; only host archive failures are returned.
    pub fn on_world_loaded(archive: &dyn SessionArchive) -> Result<Self, RuntimeError> {
        let mut store = match PolicyStore::load(archive) {
            Ok(store) => store,
            Err(PolicyStoreError::Codec(e)) => {
                warn!(error = %e, "[zd] Saved policy unreadable, starting with defaults");
                PolicyStore::new()
            }
            Err(e) => return Err(e.into()),
        };
        store.cleanup();
        info!(records = store.len(), "[zd] World loaded");
        Ok(Self { store })
    }

    /// Persist the context as part of the host's session save.
    pub fn save(&self, archive: &mut dyn SessionArchive) -> Result<(), RuntimeError> {
        self.store.save(archive)?;
        Ok(())
    }

    pub fn store(&self) -> &PolicyStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PolicyStore {
        &mut self.store
    }

    /// Host entity destroyed: forget its policy.
    pub fn on_entity_destroyed(&mut self, id: EntityId) {
        if self.store.contains(id) {
            debug!(entity = %id, "[zd] Dropping policy of destroyed entity");
        }
        self.store.delete(id);
    }

    /// Control for an inspection panel showing `target`.
    pub fn toggle_control(&mut self, panel: InspectionPanel, target: EntityId) -> ToggleControl {
        self.store.toggle_control(panel, target)
    }

    /// Apply a toggle activated in the UI. Returns the new `show_warning`.
    pub fn dispatch(&mut self, command: ToggleCommand) -> bool {
        self.store.dispatch(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zd_01_policy_store::{MockSessionArchive, PolicyRecord, STORE_SECTION_KEY};

    #[test]
    fn test_new_world_is_empty() {
        assert!(SessionContext::new_world().store().is_empty());
    }

    #[test]
    fn test_load_runs_cleanup() {
        let mut archive = MockSessionArchive::new();
        archive.sections.insert(
            STORE_SECTION_KEY.to_string(),
            br#"{"entries":[{"id":1,"record":{"showWarning":false}},{"id":2,"record":null}]}"#
                .to_vec(),
        );

        let session = SessionContext::on_world_loaded(&archive).unwrap();

        assert_eq!(session.store().ids(), vec![EntityId(1)]);
    }

    #[test]
    fn test_missing_section_starts_empty() {
        let session = SessionContext::on_world_loaded(&MockSessionArchive::new()).unwrap();
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_unreadable_section_starts_empty() {
        let mut archive = MockSessionArchive::new();
        archive.sections.insert(
            STORE_SECTION_KEY.to_string(),
            br#"[[1,{"showWarning":false}]]"#.to_vec(),
        );

        let mut session = SessionContext::on_world_loaded(&archive).unwrap();

        assert!(session.store().is_empty());
        session.store_mut().toggle(EntityId(1));
        session.save(&mut archive).unwrap();
        let reloaded = SessionContext::on_world_loaded(&archive).unwrap();
        assert_eq!(reloaded.store().ids(), vec![EntityId(1)]);
    }

    #[test]
    fn test_failing_archive_is_reported() {
        let result = SessionContext::on_world_loaded(&MockSessionArchive::failing());
        assert!(matches!(result, Err(RuntimeError::PolicyStore(_))));
    }

    #[test]
    fn test_save_then_load() {
        let mut session = SessionContext::new_world();
        let control = session.toggle_control(InspectionPanel::Zone, EntityId(4));
        assert!(!session.dispatch(control.command()));

        let mut archive = MockSessionArchive::new();
        session.save(&mut archive).unwrap();
        let mut restored = SessionContext::on_world_loaded(&archive).unwrap();

        assert_eq!(
            restored.store_mut().get(EntityId(4)),
            PolicyRecord { show_warning: false }
        );
    }

    #[test]
    fn test_entity_destroyed() {
        let mut session = SessionContext::new_world();
        session.store_mut().toggle(EntityId(9));
        session.on_entity_destroyed(EntityId(9));
        session.on_entity_destroyed(EntityId(10));
        assert!(!session.store().contains(EntityId(9)));
    }
}
