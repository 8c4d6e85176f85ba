//! # Load-Time Patching
//!
//! The stock patch targets against host method bodies, and the predicates
//! the rewritten bodies call into.

#[cfg(test)]
mod tests {
    use shared_types::{EntityId, ThingRef};
    use zd_05_instruction_patcher::{
        Instruction, MethodBody, MethodRef, OpCode, Operand, PatchEngine, PatchState, SkipReason,
    };
    use zd_runtime::{default_targets, Extension, ExtensionConfig, SessionContext};

    use crate::fixtures::*;

    /// Predicates a body calls through `callvirt`.
    fn called_predicates(body: &MethodBody) -> Vec<MethodRef> {
        body.instructions
            .iter()
            .filter(|i| i.opcode == OpCode::CallVirt)
            .filter_map(|i| match &i.operand {
                Some(Operand::Method(method)) => Some(method.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_stock_targets_all_splice() {
        let mut repo = host_methods();
        let ext = Extension::bootstrap(ExtensionConfig::default(), &mut repo, &english_templates())
            .unwrap();

        assert!(ext.patches().iter().all(|p| p.is_spliced()));
        assert_eq!(
            ext.patches()[0].state,
            PatchState::Spliced { at: 1, inserted: 3 }
        );
        assert_eq!(
            ext.patches()[2].state,
            PatchState::Spliced { at: 2, inserted: 0 }
        );
        assert_eq!(repo.installs().len(), 3);
    }

    #[test]
    fn test_plant_check_is_chained_not_replaced() {
        let mut repo = host_methods();
        let original = repo.body(&tick_long_sig()).cloned().unwrap();
        PatchEngine::new(default_targets()).run(&mut repo);
        let patched = repo.body(&tick_long_sig()).unwrap();

        // call MessageShowAllowed; brfalse L001; ldarg.0; callvirt pred; brfalse L001
        assert_eq!(&patched.instructions[..3], &original.instructions[..3]);
        assert_eq!(patched.instructions[3], Instruction::load_arg(0));
        assert_eq!(patched.instructions[5], original.instructions[2].unlabeled());
        assert_eq!(&patched.instructions[6..], &original.instructions[3..]);
    }

    #[test]
    fn test_missing_pattern_leaves_method_untouched() {
        let drifted = drifted_tick_long();
        let mut repo = host_methods().with_body(drifted.clone());

        let ext = Extension::bootstrap(ExtensionConfig::default(), &mut repo, &english_templates())
            .unwrap();

        let record = ext
            .patches()
            .iter()
            .find(|p| p.method == tick_long_sig())
            .unwrap();
        assert_eq!(
            record.skip_reason(),
            Some(&SkipReason::PatternNotFound {
                pattern: "MessageShowAllowed".to_string()
            })
        );
        assert_eq!(repo.body(&tick_long_sig()), Some(&drifted));
        assert!(!repo.installs().contains(&tick_long_sig()));

        // The other targets still applied.
        assert_eq!(ext.patches().iter().filter(|p| p.is_spliced()).count(), 2);
        assert!(ext.is_intercepting());
    }

    #[test]
    fn test_patched_bodies_call_registered_predicates() {
        let mut repo = host_methods();
        let ext = Extension::bootstrap(ExtensionConfig::default(), &mut repo, &english_templates())
            .unwrap();

        for sig in [make_leafless_sig(), tick_long_sig(), rot_tick_sig()] {
            let predicates = called_predicates(repo.body(&sig).unwrap());
            assert_eq!(predicates.len(), 1, "{sig}");
            assert!(ext.predicates().contains(&predicates[0]));
        }
    }

    #[test]
    fn test_patched_rot_check_follows_shelf_policy() {
        let mut repo = host_methods();
        let ext = Extension::bootstrap(ExtensionConfig::default(), &mut repo, &english_templates())
            .unwrap();
        let predicate = called_predicates(repo.body(&rot_tick_sig()).unwrap())
            .pop()
            .unwrap();
        let mut session = SessionContext::new_world();
        let world = colony();

        let stored = ThingRef::spawned(7, "raw rice", SHELF_CELL, MAP);
        let loose = ThingRef::spawned(8, "raw rice", OPEN_GROUND, MAP);

        assert!(ext.call_predicate(&predicate, &stored, &world, &mut session));
        assert!(!ext.call_predicate(&predicate, &loose, &world, &mut session));

        session.store_mut().toggle(EntityId(SHELF_ID));
        assert!(!ext.call_predicate(&predicate, &stored, &world, &mut session));
    }

    #[test]
    fn test_patched_rot_check_never_invents_storage() {
        let mut repo = host_methods();
        let ext = Extension::bootstrap(ExtensionConfig::default(), &mut repo, &english_templates())
            .unwrap();
        let predicate = called_predicates(repo.body(&rot_tick_sig()).unwrap())
            .pop()
            .unwrap();
        let mut session = SessionContext::new_world();
        let world = colony();

        let in_field = ThingRef::spawned(10, "raw potatoes", GROWING_CELL, MAP);
        let in_stockpile = ThingRef::spawned(11, "raw potatoes", STOCKPILE_CELL, MAP);

        assert!(!ext.call_predicate(&predicate, &in_field, &world, &mut session));
        assert!(ext.call_predicate(&predicate, &in_stockpile, &world, &mut session));

        session.store_mut().toggle(EntityId(GROWING_ZONE_ID));
        assert!(!ext.call_predicate(&predicate, &in_field, &world, &mut session));
        session.store_mut().toggle(EntityId(STOCKPILE_ID));
        assert!(!ext.call_predicate(&predicate, &in_stockpile, &world, &mut session));
    }

    #[test]
    fn test_patched_plant_check_follows_zone_policy() {
        let mut repo = host_methods();
        let ext = Extension::bootstrap(ExtensionConfig::default(), &mut repo, &english_templates())
            .unwrap();
        let predicate = called_predicates(repo.body(&make_leafless_sig()).unwrap())
            .pop()
            .unwrap();
        let mut session = SessionContext::new_world();
        let world = colony();
        let plant = ThingRef::spawned(9, "potato plant", STOCKPILE_CELL, MAP);

        assert!(ext.call_predicate(&predicate, &plant, &world, &mut session));
        session.store_mut().toggle(EntityId(STOCKPILE_ID));
        assert!(!ext.call_predicate(&predicate, &plant, &world, &mut session));
    }
}
