//! Stock patch targets and tracked templates

use zd_03_fingerprint_registry::TemplateKey;
use zd_05_instruction_patcher::{MethodSignature, PatchTarget, Window};

use super::predicates::{storage_predicate, zone_predicate};

/// Message-permission check guarding plant notifications.
const PLANT_MESSAGE_CHECK: &str = "MessageShowAllowed";
/// Storage test guarding the "rotted away in storage" notification.
const ROT_STORAGE_CHECK: &str = "IsInAnyStorage";

/// Window over `call MessageShowAllowed; brfalse`.
const PLANT_CHECK_WINDOW: Window = Window::new(0, 1);

/// Notification templates recognised by the interceptor.
pub fn default_tracked_templates() -> Vec<TemplateKey> {
    [
        "MessageDeterioratedAway",
        "MessageRottedAwayInStorage",
        "MessagePlantDiedOfCold",
        "MessagePlantDiedOfPoison",
        "MessagePlantDiedOfPollution",
        "MessagePlantDiedOfNoPollution",
    ]
    .into_iter()
    .map(TemplateKey::from)
    .collect()
}

/// Host methods rewritten at load time.
pub fn default_targets() -> Vec<PatchTarget> {
    let plant_check = |method: MethodSignature| {
        PatchTarget::insert_after_window(
            method,
            PLANT_MESSAGE_CHECK,
            PLANT_CHECK_WINDOW,
            0,
            zone_predicate(),
        )
    };

    vec![
        plant_check(MethodSignature::new("Plant", "MakeLeafless").with_param("LeaflessCause")),
        plant_check(MethodSignature::new("Plant", "TickLong")),
        PatchTarget::replace_call(
            MethodSignature::new("CompRottable", "Tick").with_param("int"),
            ROT_STORAGE_CHECK,
            storage_predicate(),
        ),
    ]
}
