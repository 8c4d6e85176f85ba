//! # Session Lifecycle
//!
//! Policy set through the inspection-panel toggle survives save/reload and
//! is dropped with its entity.

#[cfg(test)]
mod tests {
    use shared_types::{EntityId, Verdict};
    use zd_01_policy_store::{
        InspectionPanel, MockSessionArchive, LABEL_HIDING, LABEL_SHOWING, STORE_SECTION_KEY,
    };
    use zd_02_spatial_resolver::MockSpatialIndex;
    use zd_runtime::{deterioration_gate, Extension, ExtensionConfig, SessionContext};

    use crate::fixtures::*;

    fn extension() -> Extension {
        Extension::bootstrap(
            ExtensionConfig::default(),
            &mut host_methods(),
            &english_templates(),
        )
        .unwrap()
    }

    #[test]
    fn test_toggle_save_reload() {
        let ext = extension();
        let world = colony();
        let mut session = SessionContext::new_world();

        let control = session.toggle_control(InspectionPanel::StorageContainer, EntityId(SHELF_ID));
        assert_eq!(control.label_key, LABEL_SHOWING);
        session.dispatch(control.command());
        let control = session.toggle_control(InspectionPanel::StorageContainer, EntityId(SHELF_ID));
        assert_eq!(control.label_key, LABEL_HIDING);

        let mut archive = MockSessionArchive::new();
        session.save(&mut archive).unwrap();
        drop(session);

        let mut reloaded = SessionContext::on_world_loaded(&archive).unwrap();
        assert_eq!(
            ext.on_message(&deteriorated_at("Cloth", SHELF_CELL), &world, &mut reloaded),
            Verdict::Suppress
        );
    }

    #[test]
    fn test_destroyed_shelf_forgets_policy() {
        let ext = extension();
        let world = colony();
        let mut session = SessionContext::new_world();
        session.store_mut().toggle(EntityId(SHELF_ID));

        session.on_entity_destroyed(EntityId(SHELF_ID));

        assert_eq!(
            ext.on_message(&deteriorated_at("Cloth", SHELF_CELL), &world, &mut session),
            Verdict::Allow
        );
    }

    #[test]
    fn test_null_records_purged_on_load() {
        let mut archive = MockSessionArchive::new();
        archive.sections.insert(
            STORE_SECTION_KEY.to_string(),
            format!(
                r#"{{"entries":[{{"id":{SHELF_ID},"record":null}},{{"id":{STOCKPILE_ID},"record":{{"showWarning":false}}}}]}}"#
            )
            .into_bytes(),
        );

        let session = SessionContext::on_world_loaded(&archive).unwrap();

        assert_eq!(session.store().ids(), vec![EntityId(STOCKPILE_ID)]);
    }

    #[test]
    fn test_deterioration_gate_uses_session_policy() {
        let map = MockSpatialIndex::new(MAP).with_stockpile(
            STOCKPILE_ID,
            "Stockpile zone 1",
            [STOCKPILE_CELL],
        );
        let mut session = SessionContext::new_world();
        let mut send = true;

        deterioration_gate(Some(STOCKPILE_CELL), Some(&map), session.store_mut(), &mut send);
        assert!(send);

        session.store_mut().toggle(EntityId(STOCKPILE_ID));
        deterioration_gate(Some(STOCKPILE_CELL), Some(&map), session.store_mut(), &mut send);
        assert!(!send);
    }
}
