//! # Notification Policy Flow
//!
//! A notification goes through the Fingerprint Registry, the Spatial
//! Resolver and the Policy Store before the host may deliver it.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use shared_types::{EntityId, LookTarget, LookTargets, MessageType, Notification, Verdict};
    use zd_04_notification_interceptor::DecisionReason;
    use zd_05_instruction_patcher::MockMethodRepository;
    use zd_runtime::{Extension, ExtensionConfig, SessionContext};

    use crate::fixtures::*;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn extension() -> Extension {
        Extension::bootstrap(
            ExtensionConfig::default(),
            &mut MockMethodRepository::new(),
            &english_templates(),
        )
        .unwrap()
    }

    // =============================================================================
    // END-TO-END SCENARIOS
    // =============================================================================

    #[test]
    fn test_hidden_storage_container_suppresses() {
        let ext = extension();
        let mut session = SessionContext::new_world();
        session.store_mut().toggle(EntityId(SHELF_ID));

        let verdict = ext.on_message(
            &deteriorated_at("Wooden chair", SHELF_CELL),
            &colony(),
            &mut session,
        );

        assert_eq!(verdict, Verdict::Suppress);
    }

    #[test]
    fn test_showing_storage_container_allows() {
        let ext = extension();
        let mut session = SessionContext::new_world();

        let verdict = ext.on_message(
            &deteriorated_at("Wooden chair", SHELF_CELL),
            &colony(),
            &mut session,
        );

        assert_eq!(verdict, Verdict::Allow);
        assert!(session.store_mut().get(EntityId(SHELF_ID)).show_warning);
    }

    #[test]
    fn test_open_ground_allows() {
        let ext = extension();
        let mut session = SessionContext::new_world();
        session.store_mut().toggle(EntityId(SHELF_ID));
        session.store_mut().toggle(EntityId(STOCKPILE_ID));

        let note = deteriorated_at("Wooden chair", OPEN_GROUND);
        let outcome = ext
            .interceptor()
            .unwrap()
            .intercept(&note, &colony(), session.store_mut());

        assert_eq!(outcome.verdict, Verdict::Allow);
        assert_eq!(outcome.reason, DecisionReason::NoContainer);
    }

    #[test]
    fn test_shelf_policy_beats_stockpile_policy() {
        let ext = extension();
        let mut session = SessionContext::new_world();
        session.store_mut().toggle(EntityId(STOCKPILE_ID));

        let on_shelf = ext.on_message(
            &deteriorated_at("Cloth", SHELF_CELL),
            &colony(),
            &mut session,
        );
        let beside_shelf = ext.on_message(
            &deteriorated_at("Cloth", STOCKPILE_CELL),
            &colony(),
            &mut session,
        );

        assert_eq!(on_shelf, Verdict::Allow);
        assert_eq!(beside_shelf, Verdict::Suppress);
    }

    #[test]
    fn test_untracked_notification_never_touches_policy() {
        let ext = extension();
        let mut session = SessionContext::new_world();
        let note = Notification::new(
            "Pirate trader has arrived to trade.",
            LookTargets::single(LookTarget::Cell {
                cell: SHELF_CELL,
                map: MAP,
            }),
            MessageType::PositiveEvent,
        );

        assert_eq!(ext.on_message(&note, &colony(), &mut session), Verdict::Allow);
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_unloaded_map_allows() {
        let ext = extension();
        let mut session = SessionContext::new_world();
        session.store_mut().toggle(EntityId(SHELF_ID));
        let note = Notification::new(
            "Wooden chair has deteriorated away.",
            LookTargets::single(LookTarget::Cell {
                cell: SHELF_CELL,
                map: shared_types::MapId(3),
            }),
            MessageType::NegativeEvent,
        );

        assert_eq!(ext.on_message(&note, &colony(), &mut session), Verdict::Allow);
    }

    #[test]
    fn test_metrics_follow_decisions() {
        let ext = extension();
        let mut session = SessionContext::new_world();
        session.store_mut().toggle(EntityId(SHELF_ID));
        let world = colony();

        ext.on_message(&deteriorated_at("Steel", SHELF_CELL), &world, &mut session);
        ext.on_message(&deteriorated_at("Steel", OPEN_GROUND), &world, &mut session);

        let snapshot = ext.interceptor().unwrap().metrics().snapshot();
        assert_eq!(snapshot.inspected, 2);
        assert_eq!(snapshot.suppressed, 1);
        assert_eq!(snapshot.unresolved, 1);
    }

    // =============================================================================
    // PROPERTIES
    // =============================================================================

    const TRACKED: [&str; 6] = [
        "MessageDeterioratedAway",
        "MessageRottedAwayInStorage",
        "MessagePlantDiedOfCold",
        "MessagePlantDiedOfPoison",
        "MessagePlantDiedOfPollution",
        "MessagePlantDiedOfNoPollution",
    ];

    proptest! {
        #[test]
        fn prop_tracked_renderings_match(
            index in 0usize..TRACKED.len(),
            label in "[A-Za-z][a-z ]{0,20}",
        ) {
            let ext = extension();
            let rendered = english_templates()
                .render_with(TRACKED[index], &label, "thing")
                .unwrap();
            prop_assert!(ext.interceptor().unwrap().registry().matches(&rendered));
        }

        #[test]
        fn prop_untracked_rendering_does_not_match(label in "[A-Za-z][a-z ]{0,20}") {
            let ext = extension();
            let rendered = english_templates()
                .render_with("MessageTraderArrived", &label, "thing")
                .unwrap();
            prop_assert!(!ext.interceptor().unwrap().registry().matches(&rendered));
        }
    }
}
